use itertools::Itertools;

/// Degree of every vertex of a graph, indexed by vertex id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DegreeSequence(Vec<usize>);

impl DegreeSequence {
    pub fn new(degrees: Vec<usize>) -> Self {
        DegreeSequence(degrees)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Sum of all degrees, which is twice the number of edges.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Arithmetic mean degree, `0.0` for an empty sequence.
    pub fn mean(&self) -> f64 {
        if self.0.is_empty() {
            0.0
        } else {
            self.total() as f64 / self.0.len() as f64
        }
    }

    pub fn min(&self) -> Option<usize> {
        self.0.iter().copied().min()
    }

    pub fn max(&self) -> Option<usize> {
        self.0.iter().copied().max()
    }

    /// `(degree, number of vertices with that degree)` pairs, ordered by degree.
    pub fn histogram(&self) -> Vec<(usize, usize)> {
        self.0
            .iter()
            .copied()
            .sorted()
            .dedup_with_count()
            .map(|(count, degree)| (degree, count))
            .collect()
    }
}

impl From<Vec<usize>> for DegreeSequence {
    fn from(degrees: Vec<usize>) -> Self {
        DegreeSequence(degrees)
    }
}

impl FromIterator<usize> for DegreeSequence {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        DegreeSequence(iter.into_iter().collect())
    }
}

impl IntoIterator for DegreeSequence {
    type Item = usize;
    type IntoIter = std::vec::IntoIter<usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

use std::collections::BTreeSet;

use crate::degree::DegreeSequence;
use crate::error::{GraphError, GraphResult};

/// A simple undirected graph over the vertices `0..n`.
///
/// The vertex set is fixed at construction time, edges are added by the
/// generators. Self loops and parallel edges are not representable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    // adj[v] holds the neighbours of v, kept sorted
    adj: Vec<BTreeSet<usize>>,
    n_edges: usize,
}

impl Graph {
    pub fn new(n: usize) -> Self {
        Graph {
            adj: (0..n).map(|_| BTreeSet::new()).collect(),
            n_edges: 0,
        }
    }

    /// Builds the complete graph on `n` vertices.
    pub fn complete(n: usize) -> Self {
        let mut g = Graph::new(n);
        for v in 0..n {
            g.adj[v] = (0..n).filter(|u| *u != v).collect();
        }
        g.n_edges = n * n.saturating_sub(1) / 2;
        g
    }

    pub fn num_nodes(&self) -> usize {
        self.adj.len()
    }

    pub fn num_edges(&self) -> usize {
        self.n_edges
    }

    fn check_vertex(&self, v: usize) -> GraphResult<()> {
        if v < self.adj.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfBounds {
                vertex: v,
                n: self.adj.len(),
            })
        }
    }

    /// Adds the undirected edge `{src, dst}`.
    ///
    /// Returns `Ok(false)` if the edge was already present.
    pub fn add_edge(&mut self, src: usize, dst: usize) -> GraphResult<bool> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;
        if src == dst {
            return Err(GraphError::SelfLoop(src));
        }
        let inserted = self.adj[src].insert(dst);
        if inserted {
            self.adj[dst].insert(src);
            self.n_edges += 1;
        }
        Ok(inserted)
    }

    pub fn has_edge(&self, src: usize, dst: usize) -> bool {
        self.adj
            .get(src)
            .map(|ns| ns.contains(&dst))
            .unwrap_or(false)
    }

    pub fn degree(&self, v: usize) -> GraphResult<usize> {
        self.check_vertex(v)?;
        Ok(self.adj[v].len())
    }

    pub fn neighbours(&self, v: usize) -> GraphResult<impl Iterator<Item = usize> + '_> {
        self.check_vertex(v)?;
        Ok(self.adj[v].iter().copied())
    }

    /// Degree of every vertex, in vertex order.
    pub fn degrees(&self) -> DegreeSequence {
        self.adj.iter().map(|ns| ns.len()).collect()
    }
}

//! Compares the degree distribution of a preferential attachment network
//! against a random graph with the same expected mean degree.

use std::path::PathBuf;

use log::info;
use prefsim_core::DegreeSequence;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::SimResult;
use crate::graphgen::{ErdosRenyi, GraphModel, PreferentialAttachment};
use crate::loaders::degree_file::write_degree_sequence;

pub const DEFAULT_NODES: usize = 5000;
pub const DEFAULT_EDGES_PER_STEP: usize = 2;
pub const DEFAULT_BA_OUTPUT: &str = "bagraph_degree.txt";
pub const DEFAULT_RANDOM_OUTPUT: &str = "randgraph_degree.txt";

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonConfig {
    /// Number of vertices in both graphs.
    pub nodes: usize,
    /// Edges added by every joining vertex of the preferential attachment graph.
    pub edges_per_step: usize,
    pub ba_output: PathBuf,
    pub random_output: PathBuf,
    /// Seed for the random number generator, `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            nodes: DEFAULT_NODES,
            edges_per_step: DEFAULT_EDGES_PER_STEP,
            ba_output: PathBuf::from(DEFAULT_BA_OUTPUT),
            random_output: PathBuf::from(DEFAULT_RANDOM_OUTPUT),
            seed: None,
        }
    }
}

impl ComparisonConfig {
    pub fn with_nodes(mut self, nodes: usize) -> Self {
        self.nodes = nodes;
        self
    }

    pub fn with_edges_per_step(mut self, edges_per_step: usize) -> Self {
        self.edges_per_step = edges_per_step;
        self
    }

    pub fn with_outputs<P: Into<PathBuf>, Q: Into<PathBuf>>(mut self, ba: P, random: Q) -> Self {
        self.ba_output = ba.into();
        self.random_output = random.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SequenceSummary {
    pub len: usize,
    pub mean: f64,
    pub min: usize,
    pub max: usize,
}

impl From<&DegreeSequence> for SequenceSummary {
    fn from(degrees: &DegreeSequence) -> Self {
        SequenceSummary {
            len: degrees.len(),
            mean: degrees.mean(),
            min: degrees.min().unwrap_or(0),
            max: degrees.max().unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub preferential: SequenceSummary,
    pub random: SequenceSummary,
    /// Edge probability used for the random graph.
    pub edge_probability: f64,
}

/// Edge probability giving a random graph the mean degree of `degrees`:
/// the mean degree divided by the length of the sequence.
pub fn edge_probability(degrees: &DegreeSequence) -> f64 {
    if degrees.is_empty() {
        0.0
    } else {
        degrees.mean() / degrees.len() as f64
    }
}

/// Runs the comparison with the Barabási–Albert and G(n, p) generators.
pub fn run(config: &ComparisonConfig) -> SimResult<ComparisonReport> {
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    run_with(
        config,
        &PreferentialAttachment::new(config.edges_per_step),
        ErdosRenyi::new,
        &mut rng,
    )
}

/// Runs the comparison with arbitrary generators.
///
/// `random_model` builds the second model from the edge probability derived
/// from the first graph. The first degree file is written before the second
/// graph is generated.
pub fn run_with<A, B, F, R>(
    config: &ComparisonConfig,
    growth_model: &A,
    random_model: F,
    rng: &mut R,
) -> SimResult<ComparisonReport>
where
    A: GraphModel,
    B: GraphModel,
    F: FnOnce(f64) -> B,
    R: Rng + ?Sized,
{
    info!(
        "generating preferential attachment graph with {} vertices, {} edges per step",
        config.nodes, config.edges_per_step
    );
    let graph = growth_model.generate(config.nodes, rng)?;
    let ba_degrees = growth_model.degrees_of(&graph);
    drop(graph);
    write_degree_sequence(&config.ba_output, &ba_degrees)?;
    info!("wrote degree sequence to {:?}", config.ba_output);

    let p = edge_probability(&ba_degrees);
    info!("generating random graph with {} vertices, p = {p}", config.nodes);
    let model = random_model(p);
    let graph = model.generate(config.nodes, rng)?;
    let random_degrees = model.degrees_of(&graph);
    drop(graph);
    write_degree_sequence(&config.random_output, &random_degrees)?;
    info!("wrote degree sequence to {:?}", config.random_output);

    Ok(ComparisonReport {
        preferential: SequenceSummary::from(&ba_degrees),
        random: SequenceSummary::from(&random_degrees),
        edge_probability: p,
    })
}

#[cfg(test)]
mod comparator_test {
    use super::*;
    use crate::error::SimError;
    use crate::loaders::degree_file::read_degree_sequence;
    use prefsim_core::{Graph, GraphError, GraphResult};
    use pretty_assertions::assert_eq;
    use tempdir::TempDir;

    fn config_in(dir: &TempDir) -> ComparisonConfig {
        ComparisonConfig::default().with_outputs(
            dir.path().join(DEFAULT_BA_OUTPUT),
            dir.path().join(DEFAULT_RANDOM_OUTPUT),
        )
    }

    #[test]
    fn defaults() {
        let config = ComparisonConfig::default();
        assert_eq!(config.nodes, 5000);
        assert_eq!(config.edges_per_step, 2);
        assert_eq!(config.ba_output, PathBuf::from("bagraph_degree.txt"));
        assert_eq!(config.random_output, PathBuf::from("randgraph_degree.txt"));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn writes_both_degree_files() {
        let dir = TempDir::new("comparison").unwrap();
        let config = config_in(&dir).with_nodes(300).with_seed(9);
        let report = run(&config).unwrap();

        let ba = read_degree_sequence(&config.ba_output).unwrap();
        let random = read_degree_sequence(&config.random_output).unwrap();
        assert_eq!(ba.len(), 300);
        assert_eq!(random.len(), 300);
        assert_eq!(report.preferential, SequenceSummary::from(&ba));
        assert_eq!(report.random, SequenceSummary::from(&random));
        assert_eq!(report.edge_probability, ba.mean() / 300.0);
    }

    #[test]
    fn default_size_run() {
        let dir = TempDir::new("comparison").unwrap();
        let config = config_in(&dir).with_seed(1);
        let report = run(&config).unwrap();

        assert_eq!(report.preferential.len, 5000);
        assert_eq!(report.random.len, 5000);
        // 2 + 4997 * 2 edges
        assert_eq!(report.preferential.mean, 2.0 * 9996.0 / 5000.0);
        assert!(report.preferential.min >= 1);
        let expected = report.edge_probability * 4999.0;
        assert!((report.random.mean - expected).abs() < 0.5);
        assert!(report.preferential.max > report.random.max);
    }

    #[test]
    fn same_seed_same_files() {
        let first = TempDir::new("comparison").unwrap();
        let second = TempDir::new("comparison").unwrap();
        let c1 = config_in(&first).with_nodes(200).with_edges_per_step(3).with_seed(77);
        let c2 = config_in(&second).with_nodes(200).with_edges_per_step(3).with_seed(77);
        run(&c1).unwrap();
        run(&c2).unwrap();

        for (a, b) in [(&c1.ba_output, &c2.ba_output), (&c1.random_output, &c2.random_output)] {
            assert_eq!(
                std::fs::read_to_string(a).unwrap(),
                std::fs::read_to_string(b).unwrap()
            );
        }
    }

    #[test]
    fn unseeded_runs_keep_their_shape() {
        let dir = TempDir::new("comparison").unwrap();
        let config = config_in(&dir).with_nodes(100);
        for _ in 0..3 {
            let report = run(&config).unwrap();
            assert_eq!(report.preferential.len, 100);
            assert_eq!(report.random.len, 100);
        }
    }

    #[test]
    fn invalid_parameters_fail_before_writing() {
        let dir = TempDir::new("comparison").unwrap();
        let config = config_in(&dir).with_nodes(10).with_edges_per_step(0);
        let res = run(&config);

        assert!(matches!(
            res,
            Err(SimError::Graph(GraphError::InvalidParameter(_)))
        ));
        assert!(!config.ba_output.exists());
        assert!(!config.random_output.exists());
    }

    #[test]
    fn unwritable_output_is_fatal() {
        let dir = TempDir::new("comparison").unwrap();
        let config = config_in(&dir)
            .with_nodes(50)
            .with_seed(2)
            .with_outputs(dir.path().join("nope").join("a.txt"), dir.path().join("b.txt"));

        assert!(matches!(run(&config), Err(SimError::Io(_))));
        assert!(!config.random_output.exists());
    }

    struct Ring;

    impl GraphModel for Ring {
        fn generate<R: Rng + ?Sized>(&self, n: usize, _rng: &mut R) -> GraphResult<Graph> {
            let mut g = Graph::new(n);
            for v in 0..n {
                g.add_edge(v, (v + 1) % n)?;
            }
            Ok(g)
        }
    }

    #[test]
    fn substitute_models() {
        let dir = TempDir::new("comparison").unwrap();
        let config = config_in(&dir).with_nodes(8);
        let mut probability = None;
        let report = run_with(
            &config,
            &Ring,
            |p| {
                probability = Some(p);
                Ring
            },
            &mut ChaCha8Rng::seed_from_u64(0),
        )
        .unwrap();

        assert_eq!(probability, Some(0.25));
        assert_eq!(report.edge_probability, 0.25);
        assert_eq!(
            read_degree_sequence(&config.random_output).unwrap(),
            DegreeSequence::from(vec![2; 8])
        );
    }

    #[test]
    fn edge_probability_is_mean_over_length() {
        let degrees = DegreeSequence::from(vec![3, 1, 4, 1, 5, 2]);
        assert_eq!(edge_probability(&degrees), 16.0 / 6.0 / 6.0);
        assert_eq!(edge_probability(&DegreeSequence::default()), 0.0);
    }
}

use log::debug;
use prefsim_core::{Graph, GraphError, GraphResult};
use rand::Rng;

use crate::graphgen::GraphModel;

/// Barabási–Albert growth with `edges_per_step` edges per joining vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreferentialAttachment {
    pub edges_per_step: usize,
}

impl PreferentialAttachment {
    pub fn new(edges_per_step: usize) -> Self {
        PreferentialAttachment { edges_per_step }
    }
}

impl GraphModel for PreferentialAttachment {
    fn generate<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> GraphResult<Graph> {
        ba_preferential_attachment(n, self.edges_per_step, rng)
    }
}

/// Generates a graph on `n` vertices using the preferential attachment model.
///
/// Generation starts from a star on the first `edges_per_step + 1` vertices.
/// Each remaining vertex then joins the graph and connects to
/// `edges_per_step` distinct existing vertices, chosen with probability
/// proportional to their current degree (sampling without replacement).
///
/// Fails with [`GraphError::InvalidParameter`] unless
/// `1 <= edges_per_step < n`.
pub fn ba_preferential_attachment<R: Rng + ?Sized>(
    n: usize,
    edges_per_step: usize,
    rng: &mut R,
) -> GraphResult<Graph> {
    if edges_per_step < 1 || edges_per_step >= n {
        return Err(GraphError::InvalidParameter(format!(
            "preferential attachment needs 1 <= edges_per_step < n, got edges_per_step = {edges_per_step}, n = {n}"
        )));
    }

    let mut graph = Graph::new(n);
    let mut degrees: Vec<usize> = vec![0; n];

    // seed star, vertex 0 is the hub
    for leaf in 1..=edges_per_step {
        graph.add_edge(0, leaf)?;
        degrees[0] += 1;
        degrees[leaf] += 1;
    }
    let mut edge_count = 2 * edges_per_step;

    let mut targets: Vec<usize> = Vec::with_capacity(edges_per_step);
    for new_vertex in (edges_per_step + 1)..n {
        let mut normalisation = edge_count;
        targets.clear();

        for _ in 0..edges_per_step {
            let mut sum = 0;
            let rand_num = rng.gen_range(1..=normalisation);
            for pos in 0..new_vertex {
                if !targets.contains(&pos) {
                    sum += degrees[pos];
                    if sum >= rand_num {
                        targets.push(pos);
                        normalisation -= degrees[pos];
                        break;
                    }
                }
            }
        }

        for &dst in &targets {
            graph.add_edge(new_vertex, dst)?;
            degrees[dst] += 1;
        }
        degrees[new_vertex] = edges_per_step;
        edge_count += 2 * edges_per_step;
    }

    debug!(
        "preferential attachment graph: {} vertices, {} edges",
        graph.num_nodes(),
        graph.num_edges()
    );
    Ok(graph)
}

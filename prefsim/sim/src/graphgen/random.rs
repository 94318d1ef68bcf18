use log::debug;
use prefsim_core::{Graph, GraphError, GraphResult};
use rand::Rng;

use crate::graphgen::GraphModel;

/// Erdős–Rényi G(n, p): every vertex pair is joined independently with
/// probability `edge_probability`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErdosRenyi {
    pub edge_probability: f64,
}

impl ErdosRenyi {
    pub fn new(edge_probability: f64) -> Self {
        ErdosRenyi { edge_probability }
    }
}

impl GraphModel for ErdosRenyi {
    fn generate<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> GraphResult<Graph> {
        gnp_random_graph(n, self.edge_probability, rng)
    }
}

/// Generates a G(n, p) random graph.
///
/// Uses the geometric skipping method of Batagelj and Brandes, "Efficient
/// generation of large random networks", Phys. Rev. E 71, 036113 (2005), so
/// the running time is proportional to the number of vertices plus edges
/// rather than to the number of vertex pairs.
///
/// `p <= 0` yields an empty graph and `p >= 1` the complete graph.
pub fn gnp_random_graph<R: Rng + ?Sized>(n: usize, p: f64, rng: &mut R) -> GraphResult<Graph> {
    if p.is_nan() {
        return Err(GraphError::InvalidParameter("edge probability is NaN".to_string()));
    }
    if p <= 0.0 {
        return Ok(Graph::new(n));
    }
    if p >= 1.0 {
        return Ok(Graph::complete(n));
    }

    let mut graph = Graph::new(n);
    let lp = (-p).ln_1p();

    // walk the strict lower triangle row by row, (v, w) with w < v
    let mut v: usize = 1;
    let mut w: usize = 0;
    while v < n {
        let lr = (-rng.gen::<f64>()).ln_1p();
        w = w.saturating_add((lr / lp) as usize);

        // pairs left from the start of row v to the end of the triangle
        let remaining = (n - v) * (v + n - 1) / 2;
        if w >= remaining {
            break;
        }
        while v < n && w >= v {
            w -= v;
            v += 1;
        }
        if v < n {
            graph.add_edge(v, w)?;
            w += 1;
        }
    }

    debug!(
        "G(n, p) graph: {} vertices, {} edges, p = {p}",
        graph.num_nodes(),
        graph.num_edges()
    );
    Ok(graph)
}

//! Random graph generators.
//!
//! Every generator is exposed both as a plain function and as a
//! [`GraphModel`], which carries the model parameters so that the
//! comparison run can be driven by any conforming backend.

use prefsim_core::{DegreeSequence, Graph, GraphResult};
use rand::Rng;

pub mod preferential_attachment;
pub mod random;

pub use preferential_attachment::PreferentialAttachment;
pub use random::ErdosRenyi;

pub trait GraphModel {
    /// Generates a fresh graph on `n` vertices.
    fn generate<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> GraphResult<Graph>;

    fn degrees_of(&self, graph: &Graph) -> DegreeSequence {
        graph.degrees()
    }
}

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod degree;
pub mod error;
pub mod graph;

pub use degree::DegreeSequence;
pub use error::{GraphError, GraphResult};
pub use graph::Graph;

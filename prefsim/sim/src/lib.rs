#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod comparator;
pub mod error;
pub mod graphgen;
pub mod loaders;
pub mod packages;

pub use comparator::{run, ComparisonConfig, ComparisonReport};
pub use error::{ScanError, SimError, SimResult};

use std::io;
use std::path::PathBuf;

use prefsim_core::GraphError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("graph generation failed: {0}")]
    Graph(#[from] GraphError),
    #[error("failed to read or write degree file: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: '{content}' is not a degree")]
    Parse { line: usize, content: String },
}

pub type SimResult<T> = Result<T, SimError>;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

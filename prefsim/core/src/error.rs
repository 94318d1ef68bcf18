use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("invalid generator parameter: {0}")]
    InvalidParameter(String),
    #[error("vertex {vertex} is out of bounds for a graph with {n} vertices")]
    VertexOutOfBounds { vertex: usize, n: usize },
    #[error("self loops are not supported (vertex {0})")]
    SelfLoop(usize),
}

pub type GraphResult<T> = Result<T, GraphError>;

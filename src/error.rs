use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Model output has {actual} values, expected {expected}")]
    TensorLength { expected: usize, actual: usize },

    #[error("Model output has shape {actual:?}, expected {expected:?}")]
    TensorShape { expected: Vec<usize>, actual: Vec<usize> },

    #[error("{name} must be within (0, 1), got {value}")]
    InvalidThreshold { name: &'static str, value: f32 },

    #[error("ndarray shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

use std::result;
use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A numeric parameter is outside of its inclusive valid range, or NaN.
    #[error("{name} is {value}, expected a value in [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    /// The lower bound of a parameter range exceeds its upper bound.
    #[error("{name} range is inverted: minimum {min} exceeds maximum {max}")]
    InvertedRange {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("buffer holds {actual} elements but the texture needs {expected}")]
    BufferSize { expected: usize, actual: usize },
    #[error("texture must be at least one pixel wide and high")]
    EmptyTexture,
}

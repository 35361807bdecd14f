//! Error types for the generator core.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("coordinate ({x}, {y}) is outside the {size}x{size} grid")]
    OutOfRange { x: usize, y: usize, size: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

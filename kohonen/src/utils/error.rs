#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::fmt::{Display, Formatter};

/// Specifies errors which can be reported by the SOM training engine.
/// All of them are precondition violations detected before the network is modified.
#[derive(Clone, Debug, PartialEq)]
pub enum SomError {
    /// Invalid grid or schedule parameters.
    Configuration(String),
    /// An input's dimension differs from the network's one.
    DimensionMismatch {
        /// Network dimension.
        expected: usize,
        /// Input dimension.
        actual: usize,
    },
    /// Training is requested on a dataset without inputs.
    EmptyDataset,
}

impl Display for SomError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SomError::Configuration(msg) => write!(f, "invalid configuration: {msg}"),
            SomError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            SomError::EmptyDataset => write!(f, "dataset has no inputs"),
        }
    }
}

impl std::error::Error for SomError {}

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl Display for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}

impl From<SomError> for GenericError {
    fn from(value: SomError) -> Self {
        Self(value.to_string())
    }
}

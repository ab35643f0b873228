//! Error module for the Rusty Izhikevich library.
use std::error::Error;
use std::fmt;

/// Error types for the library.
#[derive(Debug, PartialEq)]
pub enum SNNError {
    /// Error for out of bounds access, e.g., neuron index beyond the network size.
    OutOfBounds(String),
    /// Error for invalid parameters, e.g., a uniform distribution with upper < lower.
    InvalidParameter(String),
    /// Error for vectors whose lengths do not match.
    IncompatibleLengths(String),
    /// Error for a neuron type name missing from the registry.
    UnknownNeuronType(String),
    /// Error for I/O operations.
    IOError(String),
}

impl fmt::Display for SNNError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SNNError::OutOfBounds(e) => write!(f, "Index out of bounds: {}", e),
            SNNError::InvalidParameter(e) => write!(f, "Invalid parameters: {}", e),
            SNNError::IncompatibleLengths(e) => write!(f, "Incompatible lengths: {}", e),
            SNNError::UnknownNeuronType(e) => write!(f, "Unknown neuron type: {}", e),
            SNNError::IOError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl Error for SNNError {}

impl From<std::io::Error> for SNNError {
    fn from(e: std::io::Error) -> Self {
        SNNError::IOError(e.to_string())
    }
}

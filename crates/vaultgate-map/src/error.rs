use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// A witness does not carry one sibling per level.
    InvalidWitnessLength { expected: usize, actual: usize },
    /// Failed to serialize data.
    SerializationError(String),
    /// Failed to deserialize data.
    DeserializationError(String),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::InvalidWitnessLength { expected, actual } => {
                write!(f, "Invalid witness length: expected {} siblings, got {}", expected, actual)
            }
            MapError::SerializationError(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
            MapError::DeserializationError(msg) => {
                write!(f, "Deserialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for MapError {}

/// Result type for map operations.
pub type Result<T> = std::result::Result<T, MapError>;

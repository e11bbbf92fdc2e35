use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Invalid flag number {0} (flags are numbered 1 to 6)")]
    InvalidFlag(usize),

    #[error("Flag offset {offset} out of range (max: {max})")]
    InvalidFlagOffset { offset: u16, max: u16 },
}

impl From<hex::FromHexError> for Error {
    fn from(e: hex::FromHexError) -> Self {
        Error::InvalidHex(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

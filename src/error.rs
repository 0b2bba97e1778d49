use std::fmt;

// Error handling types
pub type PyxResult<T> = Result<T, PyxError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PyxError {
    InvalidArgument(String),
    MalformedPyx(String),
    ProofMismatch,
    Cancelled,
    Internal(String),
}

impl fmt::Display for PyxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PyxError::InvalidArgument(s) => write!(f, "Invalid argument: {}", s),
            PyxError::MalformedPyx(s) => write!(f, "Malformed pyx: {}", s),
            PyxError::ProofMismatch => write!(f, "Proof mismatch"),
            PyxError::Cancelled => write!(f, "Cancelled"),
            PyxError::Internal(s) => write!(f, "Internal error: {}", s),
        }
    }
}

impl std::error::Error for PyxError {}

impl From<serde_json::Error> for PyxError {
    fn from(error: serde_json::Error) -> Self {
        PyxError::MalformedPyx(error.to_string())
    }
}

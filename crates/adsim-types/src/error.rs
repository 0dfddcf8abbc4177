use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdSimError {
    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("{field} = {value} must be a whole number")]
    NotWholeNumber { field: &'static str, value: f64 },

    #[error("Invalid override: {0}")]
    InvalidOverride(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for AdSimError {
    fn from(err: serde_json::Error) -> Self {
        AdSimError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AdSimError>;

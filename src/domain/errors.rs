// src/domain/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Form error: {0}")]
    Form(#[from] FormError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Command error: {0}")]
    Command(String),
}

/// Errors raised by a record store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("No record with id {0}")]
    NotFound(String),

    #[error("Duplicate record id {0}")]
    DuplicateId(String),
}

/// Errors raised while turning a draft into a record.
///
/// Missing fields are reported together; parse failures stop at the first
/// offending field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Quantity cannot be negative: {value:?}")]
    NegativeQuantity { value: String },

    #[error("Invalid time for {field}: {value:?}")]
    InvalidTime { field: &'static str, value: String },

    #[error("Invalid date: {value:?} (expected dd/mm/yyyy)")]
    InvalidDate { value: String },
}

impl ValidationError {
    /// Names of the missing required fields, empty for parse failures
    pub fn missing_fields(&self) -> &[&'static str] {
        match self {
            ValidationError::MissingFields(fields) => fields,
            _ => &[],
        }
    }
}

/// Errors returned by a form submit
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
pub type StoreResult<T> = Result<T, StoreError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
pub type FormResult<T> = Result<T, FormError>;

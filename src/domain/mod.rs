// src/domain/mod.rs
pub mod errors;
pub mod model;
pub mod repository;
pub mod service;

// Re-export common types for convenience
pub use errors::{
    AppError, AppResult, FormError, FormResult, StoreError, StoreResult, ValidationError,
    ValidationResult,
};
pub use model::{Asset, Direction, Strategy, TradingOperation};
pub use repository::{Record, RecordRepository};
pub use service::{OperationFlags, Searchable};

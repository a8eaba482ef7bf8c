pub mod affordability;
pub mod analysis;
pub mod error;
pub mod payment;
pub mod schedule;
pub mod types;

pub use error::MortgageError;
pub use types::*;

/// Standard result type for all mortgage operations
pub type MortgageResult<T> = Result<T, MortgageError>;

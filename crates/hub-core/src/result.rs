//! Convenience result type alias for Interaction Hub.

use crate::error::AppError;

/// A specialized `Result` type for hub operations.
pub type AppResult<T> = Result<T, AppError>;

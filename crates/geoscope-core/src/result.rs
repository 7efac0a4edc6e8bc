//! Convenience result type alias for Geoscope.

use crate::error::AppError;

/// A specialized `Result` type for Geoscope operations.
pub type AppResult<T> = Result<T, AppError>;

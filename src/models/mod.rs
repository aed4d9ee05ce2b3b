//! Data models for the course administration backend.
//!
//! Each model has a normalized record (built from any backend key spelling),
//! and where the backend accepts writes, the snake_case request bodies.

mod book;
mod curriculum;
mod faculty;
mod major;
mod study_time;
mod subject;

pub use book::*;
pub use curriculum::*;
pub use faculty::*;
pub use major::*;
pub use study_time::*;
pub use subject::*;

use crate::errors::AppError;

/// Reject a blank required field.
pub(crate) fn require(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

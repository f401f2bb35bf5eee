//! Error types for the planner console.

use thiserror::Error;

/// Errors that can occur while preparing planner data.
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Result type alias for planner operations.
pub type PlannerResult<T> = Result<T, PlannerError>;

//! Planner error types.

/// Local input validation failure. Nothing was sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Origin, destination or time is empty
    #[error("Please select a start, end, and time.")]
    MissingInput,
}

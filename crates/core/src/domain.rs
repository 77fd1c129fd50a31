use thiserror::Error;

/// A function was evaluated outside its valid range.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("y = {y} is outside the function domain: {reason}")]
pub struct DomainError {
    /// The rejected input.
    pub y: f64,
    /// Why the input is invalid.
    pub reason: &'static str,
}

impl DomainError {
    /// Creates a domain error for input `y`.
    #[must_use]
    pub fn new(y: f64, reason: &'static str) -> Self {
        Self { y, reason }
    }
}

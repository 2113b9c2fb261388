//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid nation name: {0:?}")]
    InvalidNation(String),

    #[error("Invalid region name: {0:?}")]
    InvalidRegion(String),
}

impl DomainError {
    /// The raw input that was rejected
    pub fn input(&self) -> &str {
        match self {
            DomainError::InvalidNation(s) | DomainError::InvalidRegion(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_nation_display() {
        let error = DomainError::InvalidNation("  ".to_string());
        assert_eq!(error.to_string(), "Invalid nation name: \"  \"");
    }

    #[test]
    fn test_input_accessor() {
        assert_eq!(DomainError::InvalidRegion("x".into()).input(), "x");
        assert_eq!(DomainError::InvalidNation("".into()).input(), "");
    }
}

//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Menu and order operations are total and never produce one of these; the
/// variants cover parsing at the edges (prices, configuration values).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed configuration input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A price could not be parsed into minor units.
    #[error("invalid price: {0}")]
    InvalidPrice(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_price(msg: impl Into<String>) -> Self {
        Self::InvalidPrice(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        assert_eq!(
            DomainError::validation("bad table").to_string(),
            "validation failed: bad table"
        );
        assert_eq!(
            DomainError::invalid_price("1.234").to_string(),
            "invalid price: 1.234"
        );
    }
}

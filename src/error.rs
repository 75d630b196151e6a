use thiserror::Error;

/// Why [crate::parse] rejected its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input does not start with an expression.
    #[error("Expected an expression")]
    NoMatch,
    /// An expression was parsed, but more input followed it.
    #[error("Unexpected trailing input {0:?}")]
    UnexpectedInput(String),
}

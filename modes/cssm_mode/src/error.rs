//! Mode construction errors.

use thiserror::Error;

/// Error building a [`CssMode`](crate::CssMode) or parsing its options.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ModeError {
    #[error("unknown CSS dialect '{0}' (expected css, scss, less or gss)")]
    UnknownDialect(String),

    #[error("indent unit must be at least 1 column, got {0}")]
    InvalidIndentUnit(usize),

    #[error("tab size must be at least 1 column, got {0}")]
    InvalidTabSize(usize),
}

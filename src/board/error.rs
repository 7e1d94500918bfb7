use thiserror::Error;

/// Errors raised while constructing a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The requested edge length was zero or negative.
    #[error("invalid board size {0}: must be positive")]
    InvalidSize(i64),
}

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("invalid square '{0}'")]
    InvalidSquare(String),
    #[error("invalid piece code '{0}'")]
    InvalidPiece(String),
    #[error("invalid promotion piece '{0}'")]
    InvalidPromotion(String),
    #[error("invalid color '{0}'")]
    InvalidColor(String),
    #[error("malformed FEN placement '{fen}': {reason}")]
    InvalidPlacement { fen: String, reason: String },
}

impl DomainError {
    pub fn placement(fen: &str, reason: impl Into<String>) -> Self {
        Self::InvalidPlacement {
            fen: fen.to_string(),
            reason: reason.into(),
        }
    }
}

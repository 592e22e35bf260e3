use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid game service address: {0}")]
    InvalidAddress(#[from] url::ParseError),
    #[error("game service request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("game service responded with {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("malformed game state: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("no dropped move is waiting for a promotion choice")]
    NoPendingMove,
    #[error("the game is over; start a new one to keep playing")]
    GameOver,
}

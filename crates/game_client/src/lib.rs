//! Client side of a remote chess game: keeps a board widget and a session
//! view in sync with the game service.

use shared::{
    domain::{Color, MoveIntent, MoveToken, PromotionPiece},
    protocol::GameResult,
};

pub mod config;
pub mod error;
pub mod render;
pub mod service;
mod session;

pub use config::{load_settings, ClientSettings};
pub use error::{ServiceError, SessionError};
pub use render::HistoryRow;
pub use service::{GameService, HttpGameService};
pub use session::{DropOutcome, GameSession, SessionPhase};

/// The visual board. Drops are not reported through this trait; front ends
/// forward them to [`GameSession::on_drop`].
pub trait BoardWidget: Send {
    /// Shows the initial position.
    fn start(&mut self);
    fn set_position(&mut self, fen: &str, animate: bool);
    fn orientation(&self) -> Color;
    fn flip_orientation(&mut self);
    fn set_draggable(&mut self, draggable: bool);
    fn is_draggable(&self) -> bool;
}

/// Everything around the board: promotion chooser, status, date, move table.
pub trait SessionView: Send {
    fn show_promotion_choice(&mut self);
    fn hide_promotion_choice(&mut self);
    fn selected_promotion(&self) -> PromotionPiece;
    fn set_status(&mut self, status: &str);
    fn set_game_date(&mut self, date: &str);
    fn set_history(&mut self, rows: &[HistoryRow]);
    fn show_error(&mut self, message: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    StateRendered {
        fen: String,
        result: Option<GameResult>,
    },
    PromotionRequested(MoveIntent),
    MoveSubmitted(MoveToken),
    MoveRejected {
        token: MoveToken,
        reason: String,
    },
    GameReset(Color),
    OrientationChanged(Color),
    GameDeleted,
}

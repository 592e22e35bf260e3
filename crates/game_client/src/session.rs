use shared::{
    domain::{is_promotion, Color, MoveIntent, MoveToken, Piece, PromotionPiece, Square},
    protocol::GameState,
};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::{
    config::ClientSettings,
    error::{ServiceError, SessionError},
    render::RenderedState,
    service::{GameService, HttpGameService},
    BoardWidget, SessionEvent, SessionView,
};

const EVENT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Idle,
    /// A pawn was dropped on its last rank; waiting for the piece choice.
    PromotionPending,
    MoveSubmitted,
    /// The last rendered state carried a result. Drops are refused.
    GameOver,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    PromotionPending,
    Submitted(GameState),
}

/// One game as seen by one player. Owns the service handle and both
/// collaborators; every state arriving from the service replaces the
/// previous one wholesale.
pub struct GameSession<S, B, V> {
    service: S,
    board: B,
    view: V,
    phase: SessionPhase,
    pending: Option<MoveIntent>,
    last_state: Option<GameState>,
    events: broadcast::Sender<SessionEvent>,
}

impl<B: BoardWidget, V: SessionView> GameSession<HttpGameService, B, V> {
    pub fn with_settings(
        settings: &ClientSettings,
        board: B,
        view: V,
    ) -> Result<Self, SessionError> {
        let service = HttpGameService::from_settings(settings)?;
        info!(base_url = %service.base_url(), "using game service");
        Ok(Self::new(service, board, view))
    }
}

impl<S: GameService, B: BoardWidget, V: SessionView> GameSession<S, B, V> {
    pub fn new(service: S, board: B, view: V) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            service,
            board,
            view,
            phase: SessionPhase::Idle,
            pending: None,
            last_state: None,
            events,
        }
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn pending_move(&self) -> Option<MoveIntent> {
        self.pending
    }

    pub fn last_state(&self) -> Option<&GameState> {
        self.last_state.as_ref()
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Shows the start position, then replaces it with the service's game.
    pub async fn initialize(&mut self) -> Result<GameState, SessionError> {
        self.board.start();
        self.board.set_draggable(true);
        self.view.hide_promotion_choice();
        self.refresh().await
    }

    pub async fn refresh(&mut self) -> Result<GameState, SessionError> {
        match self.service.fetch_state().await {
            Ok(state) => {
                self.render_game_state(&state);
                Ok(state)
            }
            Err(err) => Err(self.report("failed to fetch game state", err)),
        }
    }

    pub async fn on_drop(
        &mut self,
        source: Square,
        target: Square,
        piece: Piece,
    ) -> Result<DropOutcome, SessionError> {
        if self.phase == SessionPhase::GameOver {
            return Err(SessionError::GameOver);
        }

        let intent = MoveIntent::new(source, target);
        self.pending = Some(intent);

        if is_promotion(piece, target) {
            debug!(%source, %target, "pawn reached last rank, asking for promotion piece");
            self.phase = SessionPhase::PromotionPending;
            self.view.show_promotion_choice();
            self.emit(SessionEvent::PromotionRequested(intent));
            return Ok(DropOutcome::PromotionPending);
        }

        self.view.hide_promotion_choice();
        let state = self.submit_move(source, target, None).await?;
        Ok(DropOutcome::Submitted(state))
    }

    /// Sends `source`+`target`[+`promotion`] and renders the answer. On
    /// failure the board snaps back to the last rendered position.
    pub async fn submit_move(
        &mut self,
        source: Square,
        target: Square,
        promotion: Option<PromotionPiece>,
    ) -> Result<GameState, SessionError> {
        if self.phase == SessionPhase::GameOver {
            return Err(SessionError::GameOver);
        }

        let token = MoveToken::new(source, target, promotion);
        self.pending = None;
        self.phase = SessionPhase::MoveSubmitted;
        debug!(%token, "submitting move");
        self.emit(SessionEvent::MoveSubmitted(token.clone()));

        match self.service.submit_move(&token).await {
            Ok(state) => {
                self.render_game_state(&state);
                Ok(state)
            }
            Err(err) => {
                self.snap_back();
                self.emit(SessionEvent::MoveRejected {
                    token,
                    reason: err.to_string(),
                });
                Err(self.report("move was not accepted", err))
            }
        }
    }

    pub async fn on_promotion_confirmed(&mut self) -> Result<GameState, SessionError> {
        let intent = match (self.phase, self.pending) {
            (SessionPhase::PromotionPending, Some(intent)) => intent,
            _ => {
                warn!(phase = ?self.phase, "promotion confirmed without a pending move");
                self.view.hide_promotion_choice();
                return Err(SessionError::NoPendingMove);
            }
        };

        let piece = self.view.selected_promotion();
        self.view.hide_promotion_choice();
        self.submit_move(intent.source, intent.target, Some(piece))
            .await
    }

    /// Recreates the remote game with the client playing `player`, then
    /// fetches and renders the new game.
    pub async fn on_reset_requested(&mut self, player: Color) -> Result<GameState, SessionError> {
        self.reset_remote(player).await?;
        self.refresh().await
    }

    /// Restarts the game on the other side. The board flips only once the
    /// service has accepted the reset.
    pub async fn on_color_switch_requested(&mut self) -> Result<GameState, SessionError> {
        let player = self.board.orientation().opposite();
        self.reset_remote(player).await?;

        self.board.flip_orientation();
        let orientation = self.board.orientation();
        info!(%orientation, "board orientation changed");
        self.emit(SessionEvent::OrientationChanged(orientation));

        self.refresh().await
    }

    pub async fn delete_game(&mut self) -> Result<(), SessionError> {
        if let Err(err) = self.service.delete_game().await {
            return Err(self.report("failed to delete game", err));
        }
        info!("game deleted");
        self.clear_pending();
        self.phase = SessionPhase::Idle;
        self.emit(SessionEvent::GameDeleted);
        Ok(())
    }

    /// Replaces board, status, date and history with `state`. Never animates
    /// and never reports a drop.
    pub fn render_game_state(&mut self, state: &GameState) {
        let rendered = RenderedState::from(state);

        self.board.set_position(&rendered.fen, false);
        self.board.set_draggable(rendered.draggable);
        self.view.set_status(&rendered.status);
        self.view.set_game_date(&rendered.date);
        self.view.set_history(&rendered.rows);

        if !rendered.draggable {
            self.clear_pending();
            self.phase = SessionPhase::GameOver;
        } else if self.phase != SessionPhase::PromotionPending {
            self.phase = SessionPhase::Idle;
        }

        debug!(fen = %state.fen, moves = state.history.moves.len(), phase = ?self.phase, "rendered game state");
        self.last_state = Some(state.clone());
        self.emit(SessionEvent::StateRendered {
            fen: state.fen.clone(),
            result: state.history.result.clone(),
        });
    }

    async fn reset_remote(&mut self, player: Color) -> Result<(), SessionError> {
        info!(%player, "requesting new game");
        if let Err(err) = self.service.reset(player).await {
            return Err(self.report("failed to reset game", err));
        }
        self.clear_pending();
        self.phase = SessionPhase::Idle;
        self.emit(SessionEvent::GameReset(player));
        Ok(())
    }

    fn snap_back(&mut self) {
        match &self.last_state {
            Some(state) => {
                self.board.set_position(&state.fen, false);
                self.phase = if state.is_finished() {
                    SessionPhase::GameOver
                } else {
                    SessionPhase::Idle
                };
            }
            None => {
                self.board.start();
                self.phase = SessionPhase::Idle;
            }
        }
    }

    fn clear_pending(&mut self) {
        self.pending = None;
        self.view.hide_promotion_choice();
    }

    fn report(&mut self, context: &str, err: ServiceError) -> SessionError {
        warn!(error = %err, "{}", context);
        self.view.show_error(&format!("{context}: {err}"));
        SessionError::Service(err)
    }

    fn emit(&self, event: SessionEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;

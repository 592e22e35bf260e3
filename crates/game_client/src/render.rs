//! Pure mapping from a [`GameState`] to what the session view displays.

use shared::{
    domain::Color,
    protocol::{GameHistory, GameResult, GameState},
};

pub const IN_PROGRESS: &str = "In progress";

pub fn result_to_string(result: Option<&GameResult>) -> &'static str {
    match result {
        Some(GameResult::Draw) => "Draw",
        Some(GameResult::WhiteWins) => "Whites win",
        Some(GameResult::BlackWins) => "Blacks win",
        Some(GameResult::Unrecognized(_)) | None => IN_PROGRESS,
    }
}

pub fn status_line(result: Option<&GameResult>) -> String {
    format!("Game state: {}", result_to_string(result))
}

pub fn date_line(history: &GameHistory) -> String {
    format!("Game date: {}", history.date_text())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub index: usize,
    pub side: Color,
    pub notation: String,
}

impl HistoryRow {
    pub fn side_label(&self) -> &'static str {
        match self.side {
            Color::White => "Whites",
            Color::Black => "Blacks",
        }
    }
}

/// One row per move; white moved on even indices.
pub fn history_rows(moves: &[String]) -> Vec<HistoryRow> {
    moves
        .iter()
        .enumerate()
        .map(|(index, notation)| HistoryRow {
            index,
            side: if index % 2 == 0 {
                Color::White
            } else {
                Color::Black
            },
            notation: notation.clone(),
        })
        .collect()
}

/// Everything a view needs to redraw after a state arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedState {
    pub fen: String,
    pub draggable: bool,
    pub status: String,
    pub date: String,
    pub rows: Vec<HistoryRow>,
}

impl From<&GameState> for RenderedState {
    fn from(state: &GameState) -> Self {
        Self {
            fen: state.fen.clone(),
            draggable: !state.is_finished(),
            status: status_line(state.history.result.as_ref()),
            date: date_line(&state.history),
            rows: history_rows(&state.history.moves),
        }
    }
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;

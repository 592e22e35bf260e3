//! Text rendition of the board widget.

use game_client::BoardWidget;
use shared::{
    domain::{Color, Piece, Square},
    fen::{Placement, START_FEN},
};
use tracing::warn;

pub struct TerminalBoard {
    placement: Placement,
    fen: String,
    orientation: Color,
    draggable: bool,
}

impl TerminalBoard {
    pub fn new() -> Self {
        Self {
            placement: Placement::start(),
            fen: START_FEN.to_string(),
            orientation: Color::White,
            draggable: true,
        }
    }

    pub fn fen(&self) -> &str {
        &self.fen
    }

    #[cfg(test)]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.placement.piece_at(square)
    }

    /// Shows a dropped piece on its target before the service answers.
    pub fn drop_piece(&mut self, source: Square, target: Square) -> Option<Piece> {
        self.placement.move_piece(source, target)
    }

    /// The board as seen from the current orientation, rank labels on the
    /// left and file letters underneath.
    pub fn render(&self) -> String {
        let (ranks, files): (Vec<u8>, Vec<u8>) = match self.orientation {
            Color::White => ((0..8).rev().collect(), (0..8).collect()),
            Color::Black => ((0..8).collect(), (0..8).rev().collect()),
        };

        let mut out = String::new();
        for &rank in &ranks {
            out.push_str(&format!("{} ", rank + 1));
            for &file in &files {
                let symbol = Square::new(file, rank)
                    .and_then(|square| self.placement.piece_at(square))
                    .map_or('.', Piece::fen_char);
                out.push(' ');
                out.push(symbol);
            }
            out.push('\n');
        }
        out.push_str("  ");
        for &file in &files {
            out.push(' ');
            out.push((b'a' + file) as char);
        }
        out.push('\n');
        out
    }
}

impl Default for TerminalBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardWidget for TerminalBoard {
    fn start(&mut self) {
        self.placement = Placement::start();
        self.fen = START_FEN.to_string();
    }

    fn set_position(&mut self, fen: &str, _animate: bool) {
        match Placement::from_fen(fen) {
            Ok(placement) => {
                self.placement = placement;
                self.fen = fen.to_string();
            }
            Err(err) => warn!(error = %err, "keeping previous position"),
        }
    }

    fn orientation(&self) -> Color {
        self.orientation
    }

    fn flip_orientation(&mut self) {
        self.orientation = self.orientation.opposite();
    }

    fn set_draggable(&mut self, draggable: bool) {
        self.draggable = draggable;
    }

    fn is_draggable(&self) -> bool {
        self.draggable
    }
}

#[cfg(test)]
#[path = "tests/board_tests.rs"]
mod tests;

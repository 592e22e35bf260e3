//! Status, history and promotion prompt printed as plain lines.

use std::io::Write;

use game_client::{HistoryRow, SessionView};
use shared::domain::PromotionPiece;

pub struct TerminalView<W> {
    out: W,
    selected: PromotionPiece,
    promotion_visible: bool,
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            selected: PromotionPiece::default(),
            promotion_visible: false,
        }
    }

    pub fn select_promotion(&mut self, piece: PromotionPiece) {
        self.selected = piece;
    }

    pub fn promotion_visible(&self) -> bool {
        self.promotion_visible
    }

    pub fn print(&mut self, text: &str) {
        // write errors are ignored
        let _ = writeln!(self.out, "{text}");
        let _ = self.out.flush();
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.out
    }
}

impl<W: Write + Send> SessionView for TerminalView<W> {
    fn show_promotion_choice(&mut self) {
        if !self.promotion_visible {
            self.print("Promote to which piece? Type: promote q|r|b|n");
        }
        self.promotion_visible = true;
    }

    fn hide_promotion_choice(&mut self) {
        self.promotion_visible = false;
    }

    fn selected_promotion(&self) -> PromotionPiece {
        self.selected
    }

    fn set_status(&mut self, status: &str) {
        self.print(status);
    }

    fn set_game_date(&mut self, date: &str) {
        self.print(date);
    }

    fn set_history(&mut self, rows: &[HistoryRow]) {
        if rows.is_empty() {
            self.print("No moves yet");
            return;
        }
        self.print(&format!("{:>3}  {:<7} {}", "#", "Side", "Move"));
        for row in rows {
            self.print(&format!(
                "{:>3}  {:<7} {}",
                row.index,
                row.side_label(),
                row.notation
            ));
        }
    }

    fn show_error(&mut self, message: &str) {
        self.print(&format!("error: {message}"));
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;

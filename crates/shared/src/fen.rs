//! Piece placement, the first field of a FEN record.

use crate::{
    domain::{Piece, Square},
    error::DomainError,
};

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// 8x8 grid indexed by `[rank][file]`, rank 0 being white's back rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    squares: [[Option<Piece>; 8]; 8],
}

impl Placement {
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    pub fn start() -> Self {
        match Self::from_fen(START_FEN) {
            Ok(placement) => placement,
            Err(_) => unreachable!("START_FEN is well formed"),
        }
    }

    /// Parses the placement field of `fen`; the remaining fields are ignored.
    pub fn from_fen(fen: &str) -> Result<Self, DomainError> {
        let field = fen
            .split_whitespace()
            .next()
            .ok_or_else(|| DomainError::placement(fen, "empty"))?;
        let rows: Vec<&str> = field.split('/').collect();
        if rows.len() != 8 {
            return Err(DomainError::placement(
                fen,
                format!("expected 8 ranks, found {}", rows.len()),
            ));
        }

        let mut placement = Self::empty();
        for (row, text) in rows.iter().enumerate() {
            let rank = 7 - row;
            let mut file = 0usize;
            for ch in text.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let piece = Piece::from_fen_char(ch)
                    .ok_or_else(|| DomainError::placement(fen, format!("unknown piece '{ch}'")))?;
                if file > 7 {
                    return Err(DomainError::placement(
                        fen,
                        format!("rank {} overflows", rank + 1),
                    ));
                }
                placement.squares[rank][file] = Some(piece);
                file += 1;
            }
            if file != 8 {
                return Err(DomainError::placement(
                    fen,
                    format!("rank {} has {file} files", rank + 1),
                ));
            }
        }
        Ok(placement)
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize]
    }

    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.rank() as usize][square.file() as usize] = piece;
    }

    /// Moves whatever stands on `source` to `target` without any rule checks.
    pub fn move_piece(&mut self, source: Square, target: Square) -> Option<Piece> {
        let piece = self.piece_at(source)?;
        self.set(source, None);
        self.set(target, Some(piece));
        Some(piece)
    }

    pub fn to_fen_field(&self) -> String {
        let mut ranks = Vec::with_capacity(8);
        for rank in (0..8).rev() {
            let mut text = String::new();
            let mut empty = 0;
            for square in self.squares[rank] {
                match square {
                    Some(piece) => {
                        if empty > 0 {
                            text.push_str(&empty.to_string());
                            empty = 0;
                        }
                        text.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            ranks.push(text);
        }
        ranks.join("/")
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::start()
    }
}

#[cfg(test)]
#[path = "tests/fen_tests.rs"]
mod tests;

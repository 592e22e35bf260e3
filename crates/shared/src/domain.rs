use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A board coordinate. `file` and `rank` are zero-based, so `a1` is `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    pub fn new(file: u8, rank: u8) -> Option<Self> {
        if file > 7 || rank > 7 {
            return None;
        }
        Some(Self { file, rank })
    }

    pub fn file(&self) -> u8 {
        self.file
    }

    pub fn rank(&self) -> u8 {
        self.rank
    }
}

impl FromStr for Square {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.trim().as_bytes();
        let [file, rank] = bytes else {
            return Err(DomainError::InvalidSquare(s.to_string()));
        };
        let file = file.to_ascii_lowercase();
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(rank) {
            return Err(DomainError::InvalidSquare(s.to_string()));
        }
        Ok(Self {
            file: file - b'a',
            rank: rank - b'1',
        })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, (b'1' + self.rank) as char)
    }
}

/// Side to move, player side, and board orientation all share this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }

    /// Path segment the game service expects when a game is recreated.
    pub fn reset_code(self) -> u8 {
        match self {
            Self::White => 1,
            Self::Black => 0,
        }
    }

    /// Zero-based rank a pawn of this color promotes on.
    pub fn promotion_rank(self) -> u8 {
        match self {
            Self::White => 7,
            Self::Black => 0,
        }
    }
}

impl FromStr for Color {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "white" | "w" | "1" => Ok(Self::White),
            "black" | "b" | "0" => Ok(Self::Black),
            _ => Err(DomainError::InvalidColor(s.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(Self::Pawn),
            'N' => Some(Self::Knight),
            'B' => Some(Self::Bishop),
            'R' => Some(Self::Rook),
            'Q' => Some(Self::Queen),
            'K' => Some(Self::King),
            _ => None,
        }
    }

    fn letter(self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Rook => 'R',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }
}

/// A colored piece. Board widgets report pieces with two-letter codes
/// such as `wP` or `bK`; FEN uses single letters cased by color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let kind = PieceKind::from_letter(ch)?;
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self { color, kind })
    }

    pub fn fen_char(self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    pub fn code(self) -> String {
        let side = match self.color {
            Color::White => 'w',
            Color::Black => 'b',
        };
        format!("{side}{}", self.kind.letter())
    }

    pub fn is_pawn(self) -> bool {
        self.kind == PieceKind::Pawn
    }
}

impl FromStr for Piece {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(side), Some(letter), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(DomainError::InvalidPiece(s.to_string()));
        };
        let color = match side {
            'w' => Color::White,
            'b' => Color::Black,
            _ => return Err(DomainError::InvalidPiece(s.to_string())),
        };
        let kind =
            PieceKind::from_letter(letter).ok_or_else(|| DomainError::InvalidPiece(s.to_string()))?;
        Ok(Self { color, kind })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PromotionPiece {
    #[default]
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionPiece {
    pub const ALL: [Self; 4] = [Self::Queen, Self::Rook, Self::Bishop, Self::Knight];

    pub fn letter(self) -> char {
        match self {
            Self::Queen => 'q',
            Self::Rook => 'r',
            Self::Bishop => 'b',
            Self::Knight => 'n',
        }
    }
}

impl FromStr for PromotionPiece {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "q" | "queen" => Ok(Self::Queen),
            "r" | "rook" => Ok(Self::Rook),
            "b" | "bishop" => Ok(Self::Bishop),
            "n" | "knight" => Ok(Self::Knight),
            _ => Err(DomainError::InvalidPromotion(s.to_string())),
        }
    }
}

/// True iff `piece` is a pawn landing on the farthest rank for its color.
pub fn is_promotion(piece: Piece, target: Square) -> bool {
    piece.is_pawn() && target.rank() == piece.color.promotion_rank()
}

/// A dropped move that has not been sent to the service yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveIntent {
    pub source: Square,
    pub target: Square,
    pub promotion: Option<PromotionPiece>,
}

impl MoveIntent {
    pub fn new(source: Square, target: Square) -> Self {
        Self {
            source,
            target,
            promotion: None,
        }
    }

    pub fn with_promotion(mut self, piece: PromotionPiece) -> Self {
        self.promotion = Some(piece);
        self
    }

    pub fn token(&self) -> MoveToken {
        MoveToken::new(self.source, self.target, self.promotion)
    }
}

/// UCI move string sent in the request path, e.g. `e2e4` or `e7e8q`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoveToken(String);

impl MoveToken {
    pub fn new(source: Square, target: Square, promotion: Option<PromotionPiece>) -> Self {
        let mut token = format!("{source}{target}");
        if let Some(piece) = promotion {
            token.push(piece.letter());
        }
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;

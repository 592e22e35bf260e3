//! Typed commands read from stdin, one per line.

use anyhow::{anyhow, bail, Context, Result};
use shared::domain::{Color, PromotionPiece, Square};

pub const HELP: &str = "\
commands:
  e2e4 | e2 e4          drop the piece on e2 onto e4
  promote q|r|b|n       confirm the pending promotion
  reset [white|black]   start a new game (default: current side)
  switch                start a new game playing the other side
  refresh               fetch the game again
  delete                discard the game on the server
  board                 print the board
  help                  show this text
  quit                  leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Drop { source: Square, target: Square },
    Promote(PromotionPiece),
    Reset(Option<Color>),
    Switch,
    Refresh,
    Delete,
    Board,
    Help,
    Quit,
}

/// `Ok(None)` for blank lines.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, rest)) = words.split_first() else {
        return Ok(None);
    };

    let command = match (head.to_ascii_lowercase().as_str(), rest) {
        ("promote" | "p", [piece]) => Command::Promote(piece.parse()?),
        ("promote" | "p", []) => bail!("promote needs a piece: q, r, b or n"),
        ("reset", []) => Command::Reset(None),
        ("reset", [color]) => Command::Reset(Some(color.parse()?)),
        ("switch", []) => Command::Switch,
        ("refresh", []) => Command::Refresh,
        ("delete", []) => Command::Delete,
        ("board", []) => Command::Board,
        ("help" | "?", []) => Command::Help,
        ("quit" | "exit" | "q", []) => Command::Quit,
        (_, [target]) => Command::Drop {
            source: head.parse()?,
            target: target.parse()?,
        },
        (_, []) if head.is_ascii() && head.len() == 4 => Command::Drop {
            source: head[..2].parse().context("bad source square")?,
            target: head[2..].parse().context("bad target square")?,
        },
        _ => return Err(anyhow!("unknown command '{}', try 'help'", line.trim())),
    };
    Ok(Some(command))
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod tests;

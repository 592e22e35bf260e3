//! Types shared between the game service wire format and its clients.

pub mod domain;
pub mod error;
pub mod fen;
pub mod protocol;

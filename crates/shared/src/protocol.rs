use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Full game snapshot returned by `GET /game` and `POST /game/<move>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub fen: String,
    #[serde(rename = "hist")]
    pub history: GameHistory,
}

impl GameState {
    pub fn is_finished(&self) -> bool {
        self.history.result.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameHistory {
    pub moves: Vec<String>,
    #[serde(default)]
    pub result: Option<GameResult>,
    #[serde(default)]
    pub date: Value,
}

impl GameHistory {
    /// The date as the service sent it, strings without quotes.
    pub fn date_text(&self) -> String {
        match &self.date {
            Value::String(text) => text.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

/// Non-null `result` field. Any value besides 0, 1 and -1 still ends the
/// game but carries no winner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum GameResult {
    Draw,
    WhiteWins,
    BlackWins,
    Unrecognized(Value),
}

impl From<Value> for GameResult {
    fn from(value: Value) -> Self {
        match value.as_i64() {
            Some(0) => Self::Draw,
            Some(1) => Self::WhiteWins,
            Some(-1) => Self::BlackWins,
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<GameResult> for Value {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::Draw => Value::from(0),
            GameResult::WhiteWins => Value::from(1),
            GameResult::BlackWins => Value::from(-1),
            GameResult::Unrecognized(value) => value,
        }
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;

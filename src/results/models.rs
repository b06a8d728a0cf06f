use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::games::{GameType, ResultDetails, ScoreResult};

/// One player's stored result for one puzzle.
///
/// `(game_type, username, game_number)` identifies the record; resubmitting
/// the same puzzle replaces everything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub game_type: GameType,
    pub username: String,
    pub game_number: i32,
    pub score: i32,
    pub raw_text: String,
    #[serde(flatten)]
    pub details: ResultDetails,
}

impl GameResult {
    pub fn new(game_type: GameType, username: &str, raw_text: &str, scored: ScoreResult) -> Self {
        Self {
            game_type,
            username: username.to_string(),
            game_number: scored.game_number,
            score: scored.score,
            raw_text: raw_text.to_string(),
            details: scored.details,
        }
    }

    pub fn same_key(&self, other: &GameResult) -> bool {
        self.game_type == other.game_type
            && self.game_number == other.game_number
            && self.username == other.username
    }
}

/// Whether an upsert inserted a new row or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
}

/// A `(username, score)` row of a leaderboard query.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct ScoreRow {
    pub username: String,
    pub score: i32,
}

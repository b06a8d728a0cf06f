pub use connections::score_connections;
pub use timer::{score_mini_crossword, score_queens, score_simple_timer, score_zip};

mod connections;
mod timer;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::AsRefStr;

/// How strictly malformed Connections grids are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, AsRefStr, clap::ValueEnum)]
#[strum(serialize_all = "lowercase")]
pub enum ScoringMode {
    /// Repeated category rows are skipped and surplus mistakes are capped.
    #[default]
    Lenient,
    /// Repeated category rows and more than four mistakes reject the grid.
    Strict,
}

/// Outcome of scoring one shared result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub game_number: i32,
    pub score: i32,
    pub details: ResultDetails,
}

/// Game-specific facts stored next to the score. Games leave unused fields empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seconds: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flawless: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backtracks: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purple_first: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mistakes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub won: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_date: Option<NaiveDate>,
}

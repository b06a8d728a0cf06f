use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::models::GameResult;
use crate::games::GameType;

/// Request payload for submitting a shared result
#[derive(Debug, Deserialize)]
pub struct SubmitResultRequest {
    pub text: String,
    pub username: String,
    /// Score the text without storing it.
    #[serde(default)]
    pub dry_run: bool,
}

/// What happened to the store when a result was submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Created,
    Updated,
    DryRun,
}

/// A scored submission plus the human-readable reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub summary: String,
    pub outcome: SubmissionOutcome,
    pub result: GameResult,
}

impl Submission {
    pub fn is_new(&self) -> bool {
        self.outcome == SubmissionOutcome::Created
    }
}

/// Response for result submission
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub summary: String,
    pub is_new: bool,
    pub outcome: SubmissionOutcome,
    pub result: GameResult,
}

impl From<Submission> for SubmissionResponse {
    fn from(submission: Submission) -> Self {
        Self {
            is_new: submission.is_new(),
            summary: submission.summary,
            outcome: submission.outcome,
            result: submission.result,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub username: String,
    pub score: i32,
}

/// Ranked results for one puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub game_type: GameType,
    pub title: String,
    pub game_number: i32,
    pub date: NaiveDate,
    pub higher_score_first: bool,
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A stored result plus the date its puzzle was published
#[derive(Debug, Serialize, Deserialize)]
pub struct StoredResultResponse {
    #[serde(flatten)]
    pub result: GameResult,
    pub published_on: Option<NaiveDate>,
}

/// Query string for leaderboard endpoints; defaults to today
#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardQuery {
    pub date: Option<NaiveDate>,
}

/// Registry entry as exposed over HTTP
#[derive(Debug, Serialize, Deserialize)]
pub struct GameInfo {
    pub game_type: GameType,
    pub title: String,
    pub epoch_date: NaiveDate,
    pub higher_score_first: bool,
    pub todays_game_number: i32,
}

// Public API - what other modules can use
pub use handlers::{get_game_leaderboard, get_leaderboards, get_result, list_games, submit_result};
pub use models::{GameResult, ScoreRow, UpsertOutcome};
pub use repository::{GameResultRepository, InMemoryGameResultRepository, PostgresGameResultRepository};
pub use service::{ResultService, ResultServiceBuilder, DEFAULT_LEADERBOARD_SIZE};
pub use types::{
    GameInfo, Leaderboard, LeaderboardEntry, LeaderboardQuery, StoredResultResponse, Submission,
    SubmissionOutcome, SubmissionResponse, SubmitResultRequest,
};

mod handlers;
pub mod models;
pub mod repository;
pub mod service;
mod types;

use axum::{
    routing::{get, post},
    Router,
};

use crate::shared::AppState;

/// Routes for result submission and leaderboards
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/results", post(submit_result))
        .route("/results/:game_type/:game_number/:username", get(get_result))
        .route("/leaderboard", get(get_leaderboards))
        .route("/leaderboard/:game_type", get(get_game_leaderboard))
        .route("/games", get(list_games))
}

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{Local, NaiveDate};
use tracing::{info, instrument};

use super::types::{
    GameInfo, Leaderboard, LeaderboardQuery, StoredResultResponse, SubmissionResponse,
    SubmitResultRequest,
};
use crate::games::{definitions, game_number_to_date, GameType};
use crate::shared::{AppError, AppState};

fn resolve_date(query: &LeaderboardQuery) -> NaiveDate {
    query.date.unwrap_or_else(|| Local::now().date_naive())
}

/// HTTP handler for submitting a shared result
///
/// POST /results
/// Detects the game, scores the text and stores it unless `dry_run` is set
#[instrument(name = "submit_result", skip(state, request), fields(username = %request.username, dry_run = request.dry_run))]
pub async fn submit_result(
    State(state): State<AppState>,
    Json(request): Json<SubmitResultRequest>,
) -> Result<Json<SubmissionResponse>, AppError> {
    let submission = state
        .result_service
        .submit(&request.text, &request.username, request.dry_run)
        .await?;

    info!(summary = %submission.summary, "Result accepted");

    Ok(Json(submission.into()))
}

/// GET /results/:game_type/:game_number/:username
#[instrument(name = "get_result", skip(state))]
pub async fn get_result(
    State(state): State<AppState>,
    Path((game_type, game_number, username)): Path<(GameType, i32, String)>,
) -> Result<Json<StoredResultResponse>, AppError> {
    let result = state
        .result_service
        .get_result(game_type, &username, game_number)
        .await?;

    Ok(Json(StoredResultResponse {
        result,
        published_on: game_number_to_date(game_type, game_number),
    }))
}

/// HTTP handler for every game's leaderboard
///
/// GET /leaderboard?date=YYYY-MM-DD
#[instrument(name = "get_leaderboards", skip(state))]
pub async fn get_leaderboards(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<Vec<Leaderboard>>, AppError> {
    let boards = state
        .result_service
        .leaderboards(resolve_date(&query))
        .await?;

    info!(board_count = boards.len(), "Leaderboards listed");

    Ok(Json(boards))
}

/// GET /leaderboard/:game_type?date=YYYY-MM-DD
#[instrument(name = "get_game_leaderboard", skip(state))]
pub async fn get_game_leaderboard(
    State(state): State<AppState>,
    Path(game_type): Path<GameType>,
    Query(query): Query<LeaderboardQuery>,
) -> Result<Json<Leaderboard>, AppError> {
    let board = state
        .result_service
        .today_leaderboard(game_type, resolve_date(&query))
        .await?;

    Ok(Json(board))
}

/// GET /games
pub async fn list_games() -> Json<Vec<GameInfo>> {
    let today = Local::now().date_naive();
    let games = definitions()
        .map(|definition| GameInfo {
            game_type: definition.game_type,
            title: definition.game_type.title().to_string(),
            epoch_date: definition.epoch_date,
            higher_score_first: definition.higher_score_first,
            todays_game_number: definition.game_number_on(today),
        })
        .collect();

    Json(games)
}

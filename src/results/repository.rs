use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::str::FromStr;
use std::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use super::models::{GameResult, ScoreRow, UpsertOutcome};
use crate::games::{GameType, ResultDetails};
use crate::shared::AppError;

/// Persistence contract for game results.
#[async_trait]
pub trait GameResultRepository {
    /// Atomically inserts `result` or replaces the record with the same
    /// `(game_type, username, game_number)`.
    async fn upsert(&self, result: &GameResult) -> Result<UpsertOutcome, AppError>;

    async fn get(
        &self,
        game_type: GameType,
        username: &str,
        game_number: i32,
    ) -> Result<Option<GameResult>, AppError>;

    /// Best `limit` scores for one puzzle; equal scores keep insertion order.
    async fn top_n(
        &self,
        game_type: GameType,
        game_number: i32,
        limit: usize,
        ascending: bool,
    ) -> Result<Vec<ScoreRow>, AppError>;
}

/// In-memory implementation of GameResultRepository for development and testing
///
/// Records are kept in insertion order; an update replaces the record in place
/// so it keeps its original position for tie-breaking.
pub struct InMemoryGameResultRepository {
    results: Mutex<Vec<GameResult>>,
}

impl Default for InMemoryGameResultRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryGameResultRepository {
    pub fn new() -> Self {
        Self {
            results: Mutex::new(Vec::new()),
        }
    }

    /// Returns the current number of stored results
    pub fn result_count(&self) -> usize {
        self.results.lock().unwrap().len()
    }
}

#[async_trait]
impl GameResultRepository for InMemoryGameResultRepository {
    #[instrument(skip(self, result), fields(game_type = %result.game_type, username = %result.username, game_number = result.game_number))]
    async fn upsert(&self, result: &GameResult) -> Result<UpsertOutcome, AppError> {
        let mut results = self.results.lock().unwrap();

        match results.iter_mut().find(|existing| existing.same_key(result)) {
            Some(existing) => {
                *existing = result.clone();
                debug!(score = result.score, "Result replaced in memory");
                Ok(UpsertOutcome::Updated)
            }
            None => {
                results.push(result.clone());
                debug!(score = result.score, "Result stored in memory");
                Ok(UpsertOutcome::Created)
            }
        }
    }

    #[instrument(skip(self))]
    async fn get(
        &self,
        game_type: GameType,
        username: &str,
        game_number: i32,
    ) -> Result<Option<GameResult>, AppError> {
        let results = self.results.lock().unwrap();
        let found = results
            .iter()
            .find(|r| {
                r.game_type == game_type && r.game_number == game_number && r.username == username
            })
            .cloned();

        if found.is_none() {
            debug!("Result not found in memory");
        }
        Ok(found)
    }

    #[instrument(skip(self))]
    async fn top_n(
        &self,
        game_type: GameType,
        game_number: i32,
        limit: usize,
        ascending: bool,
    ) -> Result<Vec<ScoreRow>, AppError> {
        let results = self.results.lock().unwrap();
        let mut rows: Vec<ScoreRow> = results
            .iter()
            .filter(|r| r.game_type == game_type && r.game_number == game_number)
            .map(|r| ScoreRow {
                username: r.username.clone(),
                score: r.score,
            })
            .collect();

        // sort_by is stable, so ties stay in insertion order
        if ascending {
            rows.sort_by(|a, b| a.score.cmp(&b.score));
        } else {
            rows.sort_by(|a, b| b.score.cmp(&a.score));
        }
        rows.truncate(limit);

        debug!(row_count = rows.len(), "Leaderboard rows loaded from memory");
        Ok(rows)
    }
}

/// PostgreSQL implementation of the result repository
///
/// Expects a `game_results` table provisioned outside this crate:
///
/// ```sql
/// CREATE TABLE game_results (
///     id           BIGSERIAL PRIMARY KEY,
///     game_type    TEXT    NOT NULL,
///     username     TEXT    NOT NULL,
///     game_number  INTEGER NOT NULL,
///     score        INTEGER NOT NULL,
///     raw_text     TEXT    NOT NULL,
///     seconds      INTEGER,
///     flawless     BOOLEAN,
///     backtracks   INTEGER,
///     purple_first BOOLEAN,
///     mistakes     INTEGER,
///     won          BOOLEAN,
///     game_date    DATE,
///     UNIQUE (game_type, username, game_number)
/// );
/// ```
pub struct PostgresGameResultRepository {
    pool: PgPool,
}

impl PostgresGameResultRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_result(row: &PgRow) -> Result<GameResult, AppError> {
    let read = |e: sqlx::Error| AppError::DatabaseError(e.to_string());

    let game_type: String = row.try_get("game_type").map_err(read)?;
    let game_type = GameType::from_str(&game_type)
        .map_err(|_| AppError::DatabaseError(format!("Unknown game type: {game_type}")))?;

    Ok(GameResult {
        game_type,
        username: row.try_get("username").map_err(read)?,
        game_number: row.try_get("game_number").map_err(read)?,
        score: row.try_get("score").map_err(read)?,
        raw_text: row.try_get("raw_text").map_err(read)?,
        details: ResultDetails {
            seconds: row.try_get("seconds").map_err(read)?,
            flawless: row.try_get("flawless").map_err(read)?,
            backtracks: row.try_get("backtracks").map_err(read)?,
            purple_first: row.try_get("purple_first").map_err(read)?,
            mistakes: row.try_get("mistakes").map_err(read)?,
            won: row.try_get("won").map_err(read)?,
            game_date: row.try_get("game_date").map_err(read)?,
        },
    })
}

#[async_trait]
impl GameResultRepository for PostgresGameResultRepository {
    #[instrument(skip(self, result), fields(game_type = %result.game_type, username = %result.username, game_number = result.game_number))]
    async fn upsert(&self, result: &GameResult) -> Result<UpsertOutcome, AppError> {
        // xmax is zero only for a freshly inserted tuple
        let row = sqlx::query(
            "INSERT INTO game_results \
             (game_type, username, game_number, score, raw_text, seconds, flawless, backtracks, purple_first, mistakes, won, game_date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             ON CONFLICT (game_type, username, game_number) DO UPDATE SET \
             score = EXCLUDED.score, raw_text = EXCLUDED.raw_text, seconds = EXCLUDED.seconds, \
             flawless = EXCLUDED.flawless, backtracks = EXCLUDED.backtracks, \
             purple_first = EXCLUDED.purple_first, mistakes = EXCLUDED.mistakes, \
             won = EXCLUDED.won, game_date = EXCLUDED.game_date \
             RETURNING (xmax = 0) AS inserted",
        )
        .bind(result.game_type.as_ref())
        .bind(&result.username)
        .bind(result.game_number)
        .bind(result.score)
        .bind(&result.raw_text)
        .bind(result.details.seconds)
        .bind(result.details.flawless)
        .bind(result.details.backtracks)
        .bind(result.details.purple_first)
        .bind(result.details.mistakes)
        .bind(result.details.won)
        .bind(result.details.game_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to upsert game result in database");
            AppError::DatabaseError(e.to_string())
        })?;

        let inserted: bool = row
            .try_get("inserted")
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!(inserted, score = result.score, "Game result upserted in database");
        Ok(if inserted {
            UpsertOutcome::Created
        } else {
            UpsertOutcome::Updated
        })
    }

    #[instrument(skip(self))]
    async fn get(
        &self,
        game_type: GameType,
        username: &str,
        game_number: i32,
    ) -> Result<Option<GameResult>, AppError> {
        let row = sqlx::query(
            "SELECT game_type, username, game_number, score, raw_text, seconds, flawless, backtracks, purple_first, mistakes, won, game_date \
             FROM game_results WHERE game_type = $1 AND username = $2 AND game_number = $3",
        )
        .bind(game_type.as_ref())
        .bind(username)
        .bind(game_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to fetch game result from database");
            AppError::DatabaseError(e.to_string())
        })?;

        row.as_ref().map(row_to_result).transpose()
    }

    #[instrument(skip(self))]
    async fn top_n(
        &self,
        game_type: GameType,
        game_number: i32,
        limit: usize,
        ascending: bool,
    ) -> Result<Vec<ScoreRow>, AppError> {
        let query = if ascending {
            "SELECT username, score FROM game_results \
             WHERE game_type = $1 AND game_number = $2 ORDER BY score ASC, id ASC LIMIT $3"
        } else {
            "SELECT username, score FROM game_results \
             WHERE game_type = $1 AND game_number = $2 ORDER BY score DESC, id ASC LIMIT $3"
        };

        let rows = sqlx::query_as::<_, ScoreRow>(query)
            .bind(game_type.as_ref())
            .bind(game_number)
            .bind(i64::try_from(limit).unwrap_or(i64::MAX))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to load leaderboard from database");
                AppError::DatabaseError(e.to_string())
            })?;

        debug!(row_count = rows.len(), "Leaderboard rows loaded from database");
        Ok(rows)
    }
}

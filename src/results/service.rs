use chrono::NaiveDate;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument, warn};

use super::{
    models::{GameResult, UpsertOutcome},
    repository::GameResultRepository,
    types::{Leaderboard, LeaderboardEntry, Submission, SubmissionOutcome},
};
use crate::{
    games::{detect, GameType, ParseError, ScoreResult, ScoringMode},
    shared::AppError,
};

pub const DEFAULT_LEADERBOARD_SIZE: usize = 10;

/// Turns shared result text into stored records and answers leaderboard queries.
pub struct ResultService {
    repository: Arc<dyn GameResultRepository + Send + Sync>,
    scoring_mode: ScoringMode,
    leaderboard_size: usize,
}

impl ResultService {
    pub fn builder(repository: Arc<dyn GameResultRepository + Send + Sync>) -> ResultServiceBuilder {
        ResultServiceBuilder::new(repository)
    }

    /// Extracts and scores `text` as `game_type` without touching the store.
    pub fn score_text(&self, game_type: GameType, text: &str) -> Result<ScoreResult, ParseError> {
        game_type.definition().parse(text, self.scoring_mode)
    }

    /// Detects which game `text` belongs to, then scores and stores it.
    #[instrument(skip(self, text))]
    pub async fn submit(
        &self,
        text: &str,
        username: &str,
        dry_run: bool,
    ) -> Result<Submission, AppError> {
        let Some(definition) = detect(text) else {
            debug!("Text does not contain a supported game result");
            return Err(AppError::Unrecognized);
        };

        self.submit_game(definition.game_type, text, username, dry_run)
            .await
    }

    /// Scores `text` as `game_type` and upserts the record unless `dry_run` is set.
    #[instrument(skip(self, text))]
    pub async fn submit_game(
        &self,
        game_type: GameType,
        text: &str,
        username: &str,
        dry_run: bool,
    ) -> Result<Submission, AppError> {
        let scored = self.score_text(game_type, text).map_err(|err| {
            warn!(error = %err, "Rejected result text");
            err
        })?;

        let result = GameResult::new(game_type, username, text, scored);

        let outcome = if dry_run {
            SubmissionOutcome::DryRun
        } else {
            match self.repository.upsert(&result).await? {
                UpsertOutcome::Created => SubmissionOutcome::Created,
                UpsertOutcome::Updated => SubmissionOutcome::Updated,
            }
        };

        let summary = summarize(&result, outcome);
        info!(
            game_number = result.game_number,
            score = result.score,
            ?outcome,
            "Result submitted"
        );

        Ok(Submission {
            summary,
            outcome,
            result,
        })
    }

    /// The stored record for one player's puzzle.
    pub async fn get_result(
        &self,
        game_type: GameType,
        username: &str,
        game_number: i32,
    ) -> Result<GameResult, AppError> {
        self.repository
            .get(game_type, username, game_number)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "{} Game #{game_number} for {username}",
                    game_type.title()
                ))
            })
    }

    /// Top results for the puzzle `game_type` published on `date`.
    #[instrument(skip(self))]
    pub async fn today_leaderboard(
        &self,
        game_type: GameType,
        date: NaiveDate,
    ) -> Result<Leaderboard, AppError> {
        let definition = game_type.definition();
        let game_number = definition.game_number_on(date);

        let rows = self
            .repository
            .top_n(
                game_type,
                game_number,
                self.leaderboard_size,
                !definition.higher_score_first,
            )
            .await?;

        let entries = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| LeaderboardEntry {
                rank: index + 1,
                username: row.username,
                score: row.score,
            })
            .collect::<Vec<_>>();

        debug!(game_number, entry_count = entries.len(), "Leaderboard built");

        Ok(Leaderboard {
            game_type,
            title: game_type.title().to_string(),
            game_number,
            date,
            higher_score_first: definition.higher_score_first,
            entries,
        })
    }

    /// Every game's leaderboard for `date`, leaving out games nobody has played.
    #[instrument(skip(self))]
    pub async fn leaderboards(&self, date: NaiveDate) -> Result<Vec<Leaderboard>, AppError> {
        let mut boards = Vec::new();
        for game_type in GameType::iter() {
            let board = self.today_leaderboard(game_type, date).await?;
            if !board.is_empty() {
                boards.push(board);
            }
        }
        Ok(boards)
    }
}

fn summarize(result: &GameResult, outcome: SubmissionOutcome) -> String {
    let prefix = if outcome == SubmissionOutcome::Updated {
        "(UPDATING RECORD) "
    } else {
        ""
    };
    format!(
        "{prefix}{} Game #{} completed with score {} by {}.",
        result.game_type.title(),
        result.game_number,
        result.score,
        result.username
    )
}

pub struct ResultServiceBuilder {
    repository: Arc<dyn GameResultRepository + Send + Sync>,
    scoring_mode: ScoringMode,
    leaderboard_size: usize,
}

impl ResultServiceBuilder {
    fn new(repository: Arc<dyn GameResultRepository + Send + Sync>) -> Self {
        Self {
            repository,
            scoring_mode: ScoringMode::default(),
            leaderboard_size: DEFAULT_LEADERBOARD_SIZE,
        }
    }

    pub fn with_scoring_mode(mut self, scoring_mode: ScoringMode) -> Self {
        self.scoring_mode = scoring_mode;
        self
    }

    pub fn with_leaderboard_size(mut self, leaderboard_size: usize) -> Self {
        self.leaderboard_size = leaderboard_size;
        self
    }

    pub fn build(self) -> ResultService {
        ResultService {
            repository: self.repository,
            scoring_mode: self.scoring_mode,
            leaderboard_size: self.leaderboard_size,
        }
    }
}

// Library crate for the puzzle scoreboard server
// This file exposes the public API for integration tests

pub mod config;
pub mod games;
pub mod results;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use config::ServerConfig;
pub use games::{detect, GameDefinition, GameType, ParseError, ScoreResult, ScoringMode};
pub use results::{
    routes, GameResult, GameResultRepository, InMemoryGameResultRepository,
    PostgresGameResultRepository, ResultService, Submission, SubmissionOutcome,
};
pub use shared::{AppError, AppState};

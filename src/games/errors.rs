use thiserror::Error;

use super::types::{Category, GameType};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("No {} game information found.", .0.title())]
    NoMatch(GameType),

    #[error("Incomplete {} game information found. Missing: {}", .game_type.title(), .missing.join(", "))]
    IncompleteMatch {
        game_type: GameType,
        missing: Vec<&'static str>,
    },

    #[error("{} Game #{game_number} incomplete.", .game_type.title())]
    IncompleteGame {
        game_type: GameType,
        game_number: i32,
    },

    #[error("Invalid {} game: {reason}", .game_type.title())]
    InvalidGame {
        game_type: GameType,
        reason: InvalidGameReason,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidGameReason {
    #[error("{0} category reported found twice")]
    CategoryAlreadyFound(Category),

    #[error("{0} mistakes exceed the maximum of 4")]
    TooManyMistakes(u32),

    #[error("field set does not belong to this game")]
    MismatchedFields,
}

use chrono::NaiveDate;
use std::fmt;
use strum::IntoEnumIterator;

use super::{
    calculators::{
        score_connections, score_mini_crossword, score_queens, score_simple_timer, score_zip,
        ScoreResult, ScoringMode,
    },
    errors::ParseError,
    extractors::{
        extract_connections, extract_crossclimb, extract_mini_crossword, extract_mini_sudoku,
        extract_queens, extract_tango, extract_zip,
    },
    fields::Fields,
    numbering::{date_to_game_number, epoch_date},
    types::GameType,
};

pub type ExtractFn = fn(&str) -> Result<Fields, ParseError>;
pub type ScoreFn = fn(&Fields, ScoringMode) -> Result<ScoreResult, ParseError>;

/// Static description of one game: how to read its results and how to rank them.
#[derive(Clone, Copy)]
pub struct GameDefinition {
    pub game_type: GameType,
    pub epoch_date: NaiveDate,
    pub higher_score_first: bool,
    pub extract: ExtractFn,
    pub score: ScoreFn,
}

impl fmt::Debug for GameDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameDefinition")
            .field("game_type", &self.game_type)
            .field("epoch_date", &self.epoch_date)
            .field("higher_score_first", &self.higher_score_first)
            .finish_non_exhaustive()
    }
}

impl GameDefinition {
    /// Extracts and scores `text` in one step.
    pub fn parse(&self, text: &str, mode: ScoringMode) -> Result<ScoreResult, ParseError> {
        let fields = (self.extract)(text)?;
        (self.score)(&fields, mode)
    }

    pub fn game_number_on(&self, date: NaiveDate) -> i32 {
        date_to_game_number(self.game_type, date)
    }
}

fn entry(
    game_type: GameType,
    higher_score_first: bool,
    extract: ExtractFn,
    score: ScoreFn,
) -> GameDefinition {
    GameDefinition {
        game_type,
        epoch_date: epoch_date(game_type),
        higher_score_first,
        extract,
        score,
    }
}

impl GameType {
    pub fn definition(self) -> GameDefinition {
        match self {
            GameType::Connections => entry(self, true, extract_connections, score_connections),
            GameType::Queens => entry(self, false, extract_queens, |fields, _| {
                score_queens(fields)
            }),
            GameType::Tango => entry(self, false, extract_tango, |fields, _| {
                score_simple_timer(GameType::Tango, fields)
            }),
            GameType::Zip => entry(self, false, extract_zip, |fields, _| score_zip(fields)),
            GameType::Crossclimb => entry(self, false, extract_crossclimb, |fields, _| {
                score_simple_timer(GameType::Crossclimb, fields)
            }),
            GameType::MiniSudoku => entry(self, false, extract_mini_sudoku, |fields, _| {
                score_simple_timer(GameType::MiniSudoku, fields)
            }),
            GameType::MiniCrossword => entry(self, false, extract_mini_crossword, |fields, _| {
                score_mini_crossword(fields)
            }),
        }
    }
}

/// All game definitions in registry order.
pub fn definitions() -> impl Iterator<Item = GameDefinition> {
    GameType::iter().map(GameType::definition)
}

/// Picks the first game whose header appears in `text`.
///
/// A game "claims" the text as soon as its extractor gets past the header,
/// even if the rest of the result turns out to be malformed.
pub fn detect(text: &str) -> Option<GameDefinition> {
    definitions().find(|definition| {
        !matches!((definition.extract)(text), Err(ParseError::NoMatch(_)))
    })
}

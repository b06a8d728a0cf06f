use std::collections::HashMap;

use crate::games::{
    errors::{InvalidGameReason, ParseError},
    fields::{Fields, Guess},
    types::{Category, GameType},
};

use super::{ResultDetails, ScoringMode, ScoreResult};

/// Number of misses that ends a Connections game.
pub const MAX_MISTAKES: u32 = 4;

/// Cumulative penalty for 0..=4 mistakes; the score keeps `30 - table[mistakes]`.
const MISTAKE_TABLE: [i32; 5] = [0, 4, 10, 18, 30];
const MISTAKE_ALLOWANCE: i32 = 30;

/// Points for revealing `category` given which categories are already known.
fn category_points(category: Category, found: &HashMap<Category, i32>) -> i32 {
    let missing = |others: &[Category]| {
        others
            .iter()
            .filter(|other| !found.contains_key(*other))
            .count() as i32
    };

    let bonus = match category {
        Category::Yellow => 0,
        Category::Green => 2 * missing(&[Category::Yellow]),
        Category::Blue => 3 * missing(&[Category::Yellow, Category::Green]),
        Category::Purple => 4 * missing(&[Category::Yellow, Category::Green, Category::Blue]),
    };

    category.base_value() + bonus
}

/// Scores a Connections grid by discovery order and mistakes.
///
/// A grid is only scoreable once it is finished: either all four categories
/// were revealed, or the fourth mistake ended the game.
pub fn score_connections(fields: &Fields, mode: ScoringMode) -> Result<ScoreResult, ParseError> {
    let Fields::Connections(grid) = fields else {
        return Err(ParseError::InvalidGame {
            game_type: GameType::Connections,
            reason: InvalidGameReason::MismatchedFields,
        });
    };

    let invalid = |reason| ParseError::InvalidGame {
        game_type: GameType::Connections,
        reason,
    };

    let mut found: HashMap<Category, i32> = HashMap::new();
    let mut purple_first = false;
    let mut mistakes: u32 = 0;

    for guess in &grid.guesses {
        match guess {
            Guess::Solved(category) if found.contains_key(category) => {
                if mode == ScoringMode::Strict {
                    return Err(invalid(InvalidGameReason::CategoryAlreadyFound(*category)));
                }
            }
            Guess::Solved(category) => {
                if *category == Category::Purple && found.is_empty() {
                    purple_first = true;
                }
                let points = category_points(*category, &found);
                found.insert(*category, points);
            }
            Guess::Miss => mistakes += 1,
        }
    }

    if mistakes > MAX_MISTAKES {
        if mode == ScoringMode::Strict {
            return Err(invalid(InvalidGameReason::TooManyMistakes(mistakes)));
        }
        mistakes = MAX_MISTAKES;
    }

    let won = found.len() == 4;
    if !won && mistakes < MAX_MISTAKES {
        return Err(ParseError::IncompleteGame {
            game_type: GameType::Connections,
            game_number: grid.game_number,
        });
    }

    let mistake_penalty = MISTAKE_ALLOWANCE - MISTAKE_TABLE[mistakes as usize];
    let score = found.values().sum::<i32>() + mistake_penalty;

    Ok(ScoreResult {
        game_number: grid.game_number,
        score,
        details: ResultDetails {
            purple_first: Some(purple_first),
            mistakes: Some(mistakes as i32),
            won: Some(won),
            ..ResultDetails::default()
        },
    })
}

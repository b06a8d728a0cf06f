use super::scan::{keyword_positions, parse_number, split_digits};
use crate::games::{
    errors::ParseError,
    fields::{ConnectionsFields, Fields, Guess},
    types::{Category, GameType},
};

const KEYWORD: &str = "Connections";
const PUZZLE_LABEL: &str = "Puzzle";
const GUESS_WIDTH: usize = 4;

/// Extracts the puzzle number and the guess grid from a shared Connections result.
///
/// ```text
/// Connections
/// Puzzle #750
/// 🟨🟨🟨🟨
/// 🟩🟩🟩🟩
/// 🟪🟦🟦🟦
/// 🟦🟦🟦🟦
/// 🟪🟪🟪🟪
/// ```
pub fn extract_connections(text: &str) -> Result<Fields, ParseError> {
    let (game_number, body) = parse_header(text)?;

    let guesses = body
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(parse_guess_line)
        .collect();

    Ok(Fields::Connections(ConnectionsFields {
        game_number,
        guesses,
    }))
}

/// Locates `"Connections [Puzzle] #<N>"` and returns the number plus the text after it.
fn parse_header(text: &str) -> Result<(i32, &str), ParseError> {
    let after_hash = keyword_positions(text, KEYWORD).find_map(|idx| {
        let rest = text[idx + KEYWORD.len()..].trim_start();
        let rest = rest
            .strip_prefix(PUZZLE_LABEL)
            .map(str::trim_start)
            .unwrap_or(rest);
        rest.strip_prefix('#')
    });

    let after_hash = after_hash.ok_or(ParseError::NoMatch(GameType::Connections))?;
    let (digits, body) = split_digits(after_hash);

    match parse_number(digits).filter(|n| *n > 0) {
        Some(game_number) => Ok((game_number, body)),
        None => Err(ParseError::IncompleteMatch {
            game_type: GameType::Connections,
            missing: vec!["game_number"],
        }),
    }
}

/// A grid row is exactly four category glyphs; anything else is not a guess at all.
fn parse_guess_line(line: &str) -> Option<Guess> {
    let mut categories = Vec::with_capacity(GUESS_WIDTH);
    for glyph in line.chars() {
        categories.push(Category::from_glyph(glyph)?);
        if categories.len() > GUESS_WIDTH {
            return None;
        }
    }

    if categories.len() != GUESS_WIDTH {
        return None;
    }

    let first = categories[0];
    if categories.iter().all(|category| *category == first) {
        Some(Guess::Solved(first))
    } else {
        Some(Guess::Miss)
    }
}

use super::scan::{clock_seconds, find_numbered_header, parse_number, split_clock, split_digits};
use crate::games::{
    errors::ParseError,
    fields::{Fields, TimerFields, ZipFields},
    types::GameType,
};

const FLAWLESS_MARKER: &str = "and flawless";

/// Parses the `"<name> #<N> | <M>:<S>"` header shared by the LinkedIn timer games.
///
/// Returns the extracted fields together with the text following the clock so
/// that callers can look for game-specific trailers.
pub fn parse_simple_timer<'a>(
    text: &'a str,
    game_type: GameType,
    name: &str,
) -> Result<(TimerFields, &'a str), ParseError> {
    let after_hash =
        find_numbered_header(text, name).ok_or(ParseError::NoMatch(game_type))?;

    let (number_digits, rest) = split_digits(after_hash);
    let game_number = parse_number(number_digits).filter(|n| *n > 0);

    let (minutes, seconds, rest) = match rest.trim_start().strip_prefix('|') {
        Some(after_bar) => split_clock(after_bar.trim_start()),
        None => (None, None, rest),
    };

    let mut missing = Vec::new();
    if game_number.is_none() {
        missing.push("game_number");
    }
    if minutes.is_none() {
        missing.push("minutes");
    }
    if seconds.is_none() {
        missing.push("seconds");
    }

    match (game_number, minutes, seconds) {
        (Some(game_number), Some(minutes), Some(seconds))
            if clock_seconds(minutes, seconds).is_some() =>
        {
            let fields = TimerFields {
                game_number,
                minutes,
                seconds,
                flawless: text.contains(FLAWLESS_MARKER),
            };
            Ok((fields, rest))
        }
        (Some(_), Some(_), Some(_)) => Err(ParseError::IncompleteMatch {
            game_type,
            missing: vec!["minutes"],
        }),
        _ => Err(ParseError::IncompleteMatch { game_type, missing }),
    }
}

pub fn extract_queens(text: &str) -> Result<Fields, ParseError> {
    parse_simple_timer(text, GameType::Queens, "Queens").map(|(fields, _)| Fields::Timer(fields))
}

pub fn extract_tango(text: &str) -> Result<Fields, ParseError> {
    parse_simple_timer(text, GameType::Tango, "Tango").map(|(fields, _)| Fields::Timer(fields))
}

pub fn extract_crossclimb(text: &str) -> Result<Fields, ParseError> {
    parse_simple_timer(text, GameType::Crossclimb, "Crossclimb")
        .map(|(fields, _)| Fields::Timer(fields))
}

pub fn extract_mini_sudoku(text: &str) -> Result<Fields, ParseError> {
    parse_simple_timer(text, GameType::MiniSudoku, "Mini Sudoku")
        .map(|(fields, _)| Fields::Timer(fields))
}

pub fn extract_zip(text: &str) -> Result<Fields, ParseError> {
    let (timer, rest) = parse_simple_timer(text, GameType::Zip, "Zip")?;
    let backtracks = parse_backtracks(rest).ok_or(ParseError::IncompleteMatch {
        game_type: GameType::Zip,
        missing: vec!["backtracks"],
    })?;
    Ok(Fields::Zip(ZipFields { timer, backtracks }))
}

/// Reads `"With <K> backtracks"` / `"With no backtracks"` from the line right after the header.
///
/// Any other second line means zero backtracks; a count too large for `i32` is `None`.
fn parse_backtracks(after_header: &str) -> Option<i32> {
    let Some(tail) = after_header
        .lines()
        .nth(1)
        .and_then(|line| line.trim().strip_prefix("With"))
        .map(str::trim_start)
    else {
        return Some(0);
    };

    let (count, rest) = match tail.strip_prefix("no") {
        Some(rest) => (Some(0), rest),
        None => match split_digits(tail) {
            ("", _) => return Some(0),
            (digits, rest) => (parse_number(digits), rest),
        },
    };

    if rest.trim_start().starts_with("backtrack") {
        count
    } else {
        Some(0)
    }
}

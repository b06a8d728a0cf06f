use chrono::NaiveDate;

use super::scan::{clock_seconds, split_clock, split_digits};
use crate::games::{
    errors::ParseError,
    fields::{Fields, MiniCrosswordFields},
    numbering::epoch_date,
    types::GameType,
};

const PHRASE: &str = "New York Times Mini Crossword";
const LEAD_IN: &str = "I solved the ";

/// Extracts `"I solved the <M>/<D>/<Y> New York Times Mini Crossword in <Min>:<Sec>"`.
pub fn extract_mini_crossword(text: &str) -> Result<Fields, ParseError> {
    let idx = text
        .find(PHRASE)
        .ok_or(ParseError::NoMatch(GameType::MiniCrossword))?;
    let before = &text[..idx];
    let after = &text[idx + PHRASE.len()..];

    let epoch = epoch_date(GameType::MiniCrossword);
    let game_date = before
        .rfind(LEAD_IN)
        .and_then(|start| parse_us_date(before[start + LEAD_IN.len()..].trim()))
        .filter(|date| *date >= epoch);

    let (minutes, seconds) = match after.trim_start().strip_prefix("in") {
        Some(clock) => {
            let (minutes, seconds, _) = split_clock(clock.trim_start());
            (minutes, seconds)
        }
        None => (None, None),
    };

    let mut missing = Vec::new();
    if game_date.is_none() {
        missing.push("game_date");
    }
    if minutes.is_none() {
        missing.push("minutes");
    }
    if seconds.is_none() {
        missing.push("seconds");
    }

    match (game_date, minutes, seconds) {
        (Some(game_date), Some(minutes), Some(seconds))
            if clock_seconds(minutes, seconds).is_some() =>
        {
            Ok(Fields::MiniCrossword(MiniCrosswordFields {
                game_date,
                minutes,
                seconds,
            }))
        }
        (Some(_), Some(_), Some(_)) => Err(ParseError::IncompleteMatch {
            game_type: GameType::MiniCrossword,
            missing: vec!["minutes"],
        }),
        _ => Err(ParseError::IncompleteMatch {
            game_type: GameType::MiniCrossword,
            missing,
        }),
    }
}

/// Parses a whole `M/D/YYYY` string into a calendar date.
fn parse_us_date(text: &str) -> Option<NaiveDate> {
    let mut parts = text.split('/');
    let month = parse_part(parts.next()?)?;
    let day = parse_part(parts.next()?)?;
    let year = parse_part(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)
}

fn parse_part(part: &str) -> Option<u32> {
    match split_digits(part) {
        (digits, "") if !digits.is_empty() => digits.parse().ok(),
        _ => None,
    }
}

use chrono::{Days, NaiveDate};

use super::types::GameType;

/// Date of puzzle #1 for each game.
const fn epoch_ymd(game_type: GameType) -> (i32, u32, u32) {
    match game_type {
        GameType::Connections => (2023, 6, 12),
        GameType::Queens => (2024, 5, 1),
        GameType::Tango => (2024, 10, 8),
        GameType::Zip => (2025, 3, 18),
        GameType::Crossclimb => (2024, 5, 1),
        GameType::MiniSudoku => (2025, 8, 12),
        GameType::MiniCrossword => (2014, 8, 21),
    }
}

pub fn epoch_date(game_type: GameType) -> NaiveDate {
    let (year, month, day) = epoch_ymd(game_type);
    NaiveDate::from_ymd_opt(year, month, day).expect("epoch constants are valid calendar dates")
}

/// Sequential puzzle number for `date`; the epoch itself is game #1.
///
/// Dates before the epoch map to zero or negative numbers.
pub fn date_to_game_number(game_type: GameType, date: NaiveDate) -> i32 {
    // NaiveDate spans roughly ±262k years, so the day count always fits in i32.
    (date - epoch_date(game_type)).num_days() as i32 + 1
}

/// Calendar date of puzzle `game_number`, or `None` for numbers below 1.
pub fn game_number_to_date(game_type: GameType, game_number: i32) -> Option<NaiveDate> {
    let offset = u64::try_from(game_number.checked_sub(1)?).ok()?;
    epoch_date(game_type).checked_add_days(Days::new(offset))
}

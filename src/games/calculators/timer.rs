use crate::games::{
    errors::{InvalidGameReason, ParseError},
    fields::{Fields, TimerFields},
    numbering::date_to_game_number,
    types::GameType,
};

use super::{ResultDetails, ScoreResult};

/// Seconds added to a Zip time for every backtrack.
pub const BACKTRACK_PENALTY_SECONDS: i32 = 5;

fn mismatched(game_type: GameType) -> ParseError {
    ParseError::InvalidGame {
        game_type,
        reason: InvalidGameReason::MismatchedFields,
    }
}

fn timer_result(timer: &TimerFields, score: i32) -> ScoreResult {
    ScoreResult {
        game_number: timer.game_number,
        score,
        details: ResultDetails {
            seconds: Some(timer.total_seconds()),
            flawless: Some(timer.flawless),
            ..ResultDetails::default()
        },
    }
}

/// Tango, Crossclimb and Mini Sudoku: the solve time is the score.
pub fn score_simple_timer(game_type: GameType, fields: &Fields) -> Result<ScoreResult, ParseError> {
    match fields {
        Fields::Timer(timer) => Ok(timer_result(timer, timer.total_seconds())),
        _ => Err(mismatched(game_type)),
    }
}

/// Queens doubles the time of any solve that was not flawless.
pub fn score_queens(fields: &Fields) -> Result<ScoreResult, ParseError> {
    match fields {
        Fields::Timer(timer) => {
            let seconds = timer.total_seconds();
            let score = if timer.flawless {
                seconds
            } else {
                seconds.saturating_mul(2)
            };
            Ok(timer_result(timer, score))
        }
        _ => Err(mismatched(GameType::Queens)),
    }
}

pub fn score_zip(fields: &Fields) -> Result<ScoreResult, ParseError> {
    match fields {
        Fields::Zip(zip) => {
            let penalty = zip.backtracks.saturating_mul(BACKTRACK_PENALTY_SECONDS);
            let mut result = timer_result(&zip.timer, zip.timer.total_seconds().saturating_add(penalty));
            result.details.backtracks = Some(zip.backtracks);
            Ok(result)
        }
        _ => Err(mismatched(GameType::Zip)),
    }
}

/// The mini crossword has no puzzle number in its text; it is derived from the date.
pub fn score_mini_crossword(fields: &Fields) -> Result<ScoreResult, ParseError> {
    match fields {
        Fields::MiniCrossword(mini) => {
            let seconds = mini.total_seconds();
            Ok(ScoreResult {
                game_number: date_to_game_number(GameType::MiniCrossword, mini.game_date),
                score: seconds,
                details: ResultDetails {
                    seconds: Some(seconds),
                    game_date: Some(mini.game_date),
                    ..ResultDetails::default()
                },
            })
        }
        _ => Err(mismatched(GameType::MiniCrossword)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::fields::{MiniCrosswordFields, ZipFields};
    use chrono::NaiveDate;
    use rstest::rstest;

    fn timer(total_seconds: i32, flawless: bool) -> TimerFields {
        TimerFields {
            game_number: 426,
            minutes: total_seconds / 60,
            seconds: total_seconds % 60,
            flawless,
        }
    }

    #[rstest]
    #[case(27, true, 27)]
    #[case(27, false, 54)]
    #[case(125, false, 250)]
    fn queens_doubles_unflawless_time(
        #[case] seconds: i32,
        #[case] flawless: bool,
        #[case] expected: i32,
    ) {
        let result = score_queens(&Fields::Timer(timer(seconds, flawless))).unwrap();
        assert_eq!(result.score, expected);
        assert_eq!(result.details.seconds, Some(seconds));
        assert_eq!(result.details.flawless, Some(flawless));
    }

    #[rstest]
    #[case(8, 2, 18)]
    #[case(186, 0, 186)]
    #[case(31, 7, 66)]
    fn zip_adds_backtrack_penalty(
        #[case] seconds: i32,
        #[case] backtracks: i32,
        #[case] expected: i32,
    ) {
        let fields = Fields::Zip(ZipFields {
            timer: timer(seconds, false),
            backtracks,
        });
        let result = score_zip(&fields).unwrap();
        assert_eq!(result.score, seconds + BACKTRACK_PENALTY_SECONDS * backtracks);
        assert_eq!(result.score, expected);
        assert_eq!(result.details.backtracks, Some(backtracks));
    }

    #[test]
    fn simple_timer_score_is_total_seconds() {
        let result =
            score_simple_timer(GameType::Tango, &Fields::Timer(timer(65, false))).unwrap();
        assert_eq!(result.game_number, 426);
        assert_eq!(result.score, 65);
        assert_eq!(result.details.backtracks, None);
    }

    #[test]
    fn mini_crossword_number_comes_from_date() {
        let game_date = NaiveDate::from_ymd_opt(2025, 7, 31).unwrap();
        let fields = Fields::MiniCrossword(MiniCrosswordFields {
            game_date,
            minutes: 1,
            seconds: 23,
        });
        let result = score_mini_crossword(&fields).unwrap();
        assert_eq!(result.game_number, 3998);
        assert_eq!(result.score, 83);
        assert_eq!(result.details.seconds, Some(83));
        assert_eq!(result.details.game_date, Some(game_date));
        assert_eq!(result.details.flawless, None);
    }

    #[test]
    fn rejects_fields_from_another_game() {
        let result = score_zip(&Fields::Timer(timer(10, true)));
        assert!(matches!(
            result,
            Err(ParseError::InvalidGame {
                reason: InvalidGameReason::MismatchedFields,
                ..
            })
        ));
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::Category;

/// Facts pulled out of a shared result before any scoring happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Fields {
    Timer(TimerFields),
    Zip(ZipFields),
    Connections(ConnectionsFields),
    MiniCrossword(MiniCrosswordFields),
}

/// `"<GameName> #<N> | <M>:<S>"` plus the flawless marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerFields {
    pub game_number: i32,
    pub minutes: i32,
    pub seconds: i32,
    pub flawless: bool,
}

impl TimerFields {
    pub fn total_seconds(&self) -> i32 {
        self.minutes * 60 + self.seconds
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipFields {
    pub timer: TimerFields,
    pub backtracks: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionsFields {
    pub game_number: i32,
    pub guesses: Vec<Guess>,
}

/// One row of the Connections grid: either a solved category or a miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Guess {
    Solved(Category),
    Miss,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiniCrosswordFields {
    pub game_date: NaiveDate,
    pub minutes: i32,
    pub seconds: i32,
}

impl MiniCrosswordFields {
    pub fn total_seconds(&self) -> i32 {
        self.minutes * 60 + self.seconds
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Every daily puzzle the scoreboard understands.
///
/// The string form (`as_ref`, `FromStr`, serde) is the snake_case key used in
/// storage and URLs; [`GameType::title`] is the human label used in summaries.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GameType {
    Connections,
    Queens,
    Tango,
    Zip,
    Crossclimb,
    MiniSudoku,
    MiniCrossword,
}

impl GameType {
    pub fn title(&self) -> &'static str {
        match self {
            GameType::Connections => "Connections",
            GameType::Queens => "Queens",
            GameType::Tango => "Tango",
            GameType::Zip => "Zip",
            GameType::Crossclimb => "Crossclimb",
            GameType::MiniSudoku => "Mini Sudoku",
            GameType::MiniCrossword => "Mini Crossword",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// The four colour-coded groups of a Connections grid, in ascending difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Yellow,
    Green,
    Blue,
    Purple,
}

impl Category {
    pub fn glyph(&self) -> char {
        match self {
            Category::Yellow => '🟨',
            Category::Green => '🟩',
            Category::Blue => '🟦',
            Category::Purple => '🟪',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '🟨' => Some(Category::Yellow),
            '🟩' => Some(Category::Green),
            '🟦' => Some(Category::Blue),
            '🟪' => Some(Category::Purple),
            _ => None,
        }
    }

    /// Points awarded when the category is revealed, before any early-discovery bonus.
    pub fn base_value(&self) -> i32 {
        match self {
            Category::Yellow => 5,
            Category::Green => 10,
            Category::Blue => 15,
            Category::Purple => 20,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Category::Yellow => "yellow",
                Category::Green => "green",
                Category::Blue => "blue",
                Category::Purple => "purple",
            }
        )
    }
}

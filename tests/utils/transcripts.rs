//! Result text as players paste it
#![allow(dead_code)]

pub const CONNECTIONS_PURPLE_FIRST: &str =
    "Connections\nPuzzle #736\n🟪🟪🟪🟪\n🟦🟦🟦🟦\n🟩🟩🟩🟩\n🟨🟨🟨🟨";

/// Easiest-first with one miss: 5 + 10 + 15 + 20 + (30 - 4)
pub const CONNECTIONS_ONE_MISS: &str =
    "Connections\nPuzzle #736\n🟨🟨🟨🟨\n🟨🟦🟨🟨\n🟩🟩🟩🟩\n🟦🟦🟦🟦\n🟪🟪🟪🟪";

/// Yellow then four misses: 5 + (30 - 30)
pub const CONNECTIONS_LOSS: &str =
    "Connections\nPuzzle #736\n🟨🟨🟨🟨\n🟩🟦🟩🟩\n🟦🟩🟦🟦\n🟪🟦🟪🟪\n🟩🟪🟩🟩";

/// Five chatter lines and no finished grid
pub const CONNECTIONS_UNFINISHED: &str =
    "Connections\nPuzzle #750\nso close today\n🟨🟨🟨🟨\nnot sure\nabout\npurple\nhelp";

pub const CONNECTIONS_REPEATED_ROW: &str =
    "Connections\nPuzzle #736\n🟨🟨🟨🟨\n🟨🟨🟨🟨\n🟩🟩🟩🟩\n🟦🟦🟦🟦\n🟪🟪🟪🟪";

pub const QUEENS_FLAWLESS: &str = "Queens #426 | 0:27 and flawless\nFirst 👑s: 🟩 🟦 ⬜";

pub const QUEENS_WITH_HINTS: &str = "Queens #426 | 0:40\nFirst 👑s: 🟩 🟦 ⬜";

pub const ZIP_TWO_BACKTRACKS: &str = "Zip #109 | 0:08 🏁\nWith 2 backtracks 🛑";

/// The second line is chatter, not a backtracks line
pub const ZIP_WITH_CHATTER: &str =
    "Zip #109 | 0:09 🏁\n🏅 Top 1%\nWith friends, no backtracks today";

pub const ZIP_CLEAN: &str = "Zip #109 | 0:12 and flawless 🏁";

pub const MINI_CROSSWORD: &str =
    "I solved the 7/31/2025 New York Times Mini Crossword in 1:23! https://www.nytimes.com/crosswords";

pub const QUEENS_MISSING_TIME: &str = "Queens #426 | and flawless";

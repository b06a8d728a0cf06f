// Public API
pub use calculators::{ResultDetails, ScoreResult, ScoringMode};
pub use errors::{InvalidGameReason, ParseError};
pub use fields::{ConnectionsFields, Fields, Guess, MiniCrosswordFields, TimerFields, ZipFields};
pub use numbering::{date_to_game_number, epoch_date, game_number_to_date};
pub use registry::{definitions, detect, GameDefinition};
pub use types::{Category, GameType};

pub mod calculators;
pub mod extractors;
pub mod numbering;

mod errors;
mod fields;
mod registry;
mod types;

use clap::{builder::RangedU64ValueParser, Parser};

use crate::games::ScoringMode;
use crate::results::DEFAULT_LEADERBOARD_SIZE;

/// Server settings, read from flags or the matching environment variables
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "puzzle_scoreboard", about = "Score shared puzzle results and serve leaderboards")]
pub struct ServerConfig {
    /// Address the HTTP server listens on
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:3000")]
    pub bind_addr: String,

    /// PostgreSQL connection URL; the in-memory store is used when absent
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// How malformed Connections grids are treated
    #[arg(long, env = "SCORING_MODE", value_enum, ignore_case = true, default_value_t)]
    pub scoring_mode: ScoringMode,

    /// Entries per leaderboard
    #[arg(
        long,
        env = "LEADERBOARD_SIZE",
        default_value_t = DEFAULT_LEADERBOARD_SIZE,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub leaderboard_size: usize,
}

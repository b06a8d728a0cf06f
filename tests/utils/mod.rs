pub mod actions;
pub mod assertions;
pub mod setup;
pub mod transcripts;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use assertions::{LeaderboardAssertion, SubmissionAssertion};
#[allow(unused_imports)]
pub use setup::{TestSetup, TestSetupBuilder};

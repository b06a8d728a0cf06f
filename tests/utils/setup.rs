use axum::Router;
use std::sync::Arc;

use puzzle_scoreboard::{
    routes, AppState, InMemoryGameResultRepository, ResultService, ScoringMode,
};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub app: Router,
    pub repository: Arc<InMemoryGameResultRepository>,
    pub service: Arc<ResultService>,
}

pub struct TestSetupBuilder {
    scoring_mode: ScoringMode,
    leaderboard_size: Option<usize>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self {
            scoring_mode: ScoringMode::Lenient,
            leaderboard_size: None,
        }
    }

    pub fn strict(mut self) -> Self {
        self.scoring_mode = ScoringMode::Strict;
        self
    }

    #[allow(dead_code)]
    pub fn with_leaderboard_size(mut self, size: usize) -> Self {
        self.leaderboard_size = Some(size);
        self
    }

    pub fn build(self) -> TestSetup {
        let repository = Arc::new(InMemoryGameResultRepository::new());

        let mut builder =
            ResultService::builder(repository.clone()).with_scoring_mode(self.scoring_mode);
        if let Some(size) = self.leaderboard_size {
            builder = builder.with_leaderboard_size(size);
        }
        let service = Arc::new(builder.build());

        let app = routes().with_state(AppState::new(service.clone()));

        TestSetup {
            app,
            repository,
            service,
        }
    }
}

use clap::Parser;
use puzzle_scoreboard::{
    results, AppState, GameResultRepository, InMemoryGameResultRepository,
    PostgresGameResultRepository, ResultService, ServerConfig,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "puzzle_scoreboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting puzzle scoreboard server");
    if !dotenv_loaded {
        warn!("No .env file found, reading configuration from the environment only");
    }

    let config = ServerConfig::parse();

    let repository: Arc<dyn GameResultRepository + Send + Sync> = match &config.database_url {
        Some(database_url) => {
            let pool = sqlx::PgPool::connect(database_url).await?;
            info!("Using PostgreSQL result store");
            Arc::new(PostgresGameResultRepository::new(pool))
        }
        None => {
            info!("DATABASE_URL not set, using in-memory result store");
            Arc::new(InMemoryGameResultRepository::new())
        }
    };

    let result_service = ResultService::builder(repository)
        .with_scoring_mode(config.scoring_mode)
        .with_leaderboard_size(config.leaderboard_size)
        .build();

    info!(
        scoring_mode = config.scoring_mode.as_ref(),
        leaderboard_size = config.leaderboard_size,
        "Result service ready"
    );

    let app_state = AppState::new(Arc::new(result_service));

    let app = results::routes()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Server running on http://{}", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}

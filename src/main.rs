use std::str::FromStr;
use std::sync::Arc;

use course_api::api::router;
use course_api::config::AppConfig;
use course_api::db::{self, SqliteCourseStore};
use course_api::state::AppState;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "course_api=debug,tower_http=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let connect_options =
        SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    // lazy, so an unreachable database is reported by the liveness check
    // instead of aborting startup
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy_with(connect_options);

    let store = Arc::new(SqliteCourseStore::new(pool));
    db::initialize(store.as_ref()).await;

    let app = router(AppState::new(store));

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

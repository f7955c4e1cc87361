use axum::extract::DefaultBodyLimit;
use screening_backend::{config::Config, database::pool::create_pool, routes, AppState};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    if config.telegram_bot_token.is_none() || config.telegram_channel_id.is_none() {
        info!("Telegram credentials not set, notifications disabled");
    }
    let app_state = AppState::new(pool, &config)?;

    let app = routes::api_router()
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
        .with_state(app_state);

    let listener = TcpListener::bind(&config.server_address).await?;
    info!("Listening on {}", config.server_address);
    axum::serve(listener, app).await?;

    Ok(())
}

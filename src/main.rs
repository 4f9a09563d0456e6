mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let workspace = startup::ensure_default_workspace(&db, &config.default_workspace).await?;

    tracing::info!("Default workspace: {} ({})", workspace.name, workspace.id);

    let mut app = router::router(AppState::new(db, config.default_workspace.clone()));
    if let Some(origin) = &config.cors_origin {
        app = app.layer(router::cors_layer(origin)?);
    }

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("Starting server on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

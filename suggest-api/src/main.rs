mod adapters;
mod app_state;
mod config;
mod domain;
mod factory;
mod router;
mod routes;

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "suggest_api=debug,tower_http=debug,info".into()),
        )
        .with_target(false)
        .compact()
        .init();

    let settings = crate::config::read_config()?;

    let connection_pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy_with(settings.database.with_db());

    sqlx::migrate!("./migrations").run(&connection_pool).await?;

    let app_state = factory::build_app_state(connection_pool, &settings.suggestions);
    let app = router::create(app_state);

    let addr = format!("{}:{}", settings.application.host, settings.application.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

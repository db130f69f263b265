use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use krill_oracle::{
    config::AppConfig, routes, services::completion::GroqClient, state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    AppConfig::load_dotenv();
    let cfg = AppConfig::from_env();
    if cfg.api_key.is_none() {
        tracing::warn!("GROQ_API_KEY is not set, completions will fail until it is");
    }

    let client = GroqClient::from_config(&cfg);
    let state = Arc::new(AppState::new(Arc::new(client)));

    let app = routes::create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.bind_addr))?;

    tracing::info!(model = %cfg.model, "🦐 Krill running at http://{}", cfg.bind_addr);
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

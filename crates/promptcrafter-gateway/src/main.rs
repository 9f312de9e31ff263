//! PromptCrafter Gateway — HTTP front for the prompt core.
//! Serves prompt generation and the tone catalog; no persistence, no auth.

mod config;
mod error;
mod logging;
mod routes;

use crate::config::GatewayConfig;
use crate::error::GatewayError;

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[promptcrafter-gateway] .env not loaded: {} (using system environment)", e);
    }

    let config = match GatewayConfig::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("[promptcrafter-gateway] {}", GatewayError::from(e));
            std::process::exit(1);
        }
    };

    let _log_guard = logging::init(config.log_dir.as_deref());

    if let Err(e) = run(config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: GatewayConfig) -> Result<(), GatewayError> {
    let addr = config.bind_addr();
    let app = routes::build_app(&config.cors_allowed_origins);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| GatewayError::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!(
        "{} v{} listening on http://{}",
        config.app_name,
        promptcrafter_core::version(),
        addr
    );

    axum::serve(listener, app).await.map_err(GatewayError::Serve)
}

mod config;
mod errors;
mod repositories;
mod routes;
mod services;
mod state;
mod structs;

use anyhow::Context;
use std::{env::var, sync::Arc};
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{config::Config, repositories::records::LeapcellTable, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 可能帶 RUST_LOG，要先載入
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(log_filter(var("RUST_LOG").ok().as_deref()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let table = LeapcellTable::new(&config).context("failed to build table api client")?;
    let bind_addr = config.bind_addr();

    let app = routes::app(AppState::new(config, Arc::new(table)));

    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    tracing::info!("App is listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

const DEFAULT_LOG_FILTER: &str = "leapcell_blog=debug,tower_http=debug";

/// RUST_LOG 無效或未設定時使用預設 filter
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_prefers_rust_log() {
        assert_eq!(
            log_filter(Some("warn")).to_string(),
            EnvFilter::new("warn").to_string()
        );
    }

    #[test]
    fn log_filter_falls_back_to_default() {
        assert_eq!(
            log_filter(None).to_string(),
            EnvFilter::new(DEFAULT_LOG_FILTER).to_string()
        );
        assert_eq!(
            log_filter(Some("  ")).to_string(),
            EnvFilter::new(DEFAULT_LOG_FILTER).to_string()
        );
    }
}

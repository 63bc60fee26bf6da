use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::sync::Mutex;
use tracing::{info, warn};

use reqtally::api::{self, AppState};
use reqtally::config::AppConfig;
use reqtally::snapshot::{self, LoadedState};
use reqtally::tasks::evictor;
use reqtally::telemetry;

#[tokio::main]
async fn main() -> Result<()> {
	// Load environment variables from .env if present
	dotenv().ok();
	telemetry::init_tracing();

	let cfg = AppConfig::from_env();

	let window = match snapshot::load(&cfg.snapshot_path).await {
		LoadedState::Recovered(w) => {
			info!("restored {} arrivals from {}", w.count(), cfg.snapshot_path.display());
			w
		}
		LoadedState::Fresh(w) => {
			info!("no usable snapshot, starting with an empty window");
			w
		}
	};

	let state = AppState { window: Arc::new(Mutex::new(window)), cfg: cfg.clone() };

	tokio::spawn(evictor::run_evictor(state.clone()));

	let app = api::router(state.clone());
	let addr: SocketAddr = format!("{}:{}", cfg.host, cfg.port).parse()?;
	let listener = tokio::net::TcpListener::bind(addr).await?;

	info!(%addr, "starting server");
	axum::serve(listener, app)
		.with_graceful_shutdown(shutdown_signal())
		.await?;

	// One final save once the server loop has drained
	let window = state.window.lock().await;
	if let Err(e) = snapshot::save(&cfg.snapshot_path, &window).await {
		warn!("final snapshot save error: {e}");
	}
	info!("shutdown complete");

	Ok(())
}

async fn shutdown_signal() {
	let ctrl_c = async {
		tokio::signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
	};

	#[cfg(unix)]
	let terminate = async {
		tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
			.expect("failed to install SIGTERM handler")
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

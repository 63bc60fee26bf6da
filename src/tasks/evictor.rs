use std::time::Duration;

use time::OffsetDateTime;
use tracing::{debug, warn};

use crate::{api::AppState, snapshot};

pub const SWEEP_INTERVAL: Duration = Duration::from_secs(1);

pub async fn run_evictor(state: AppState) {
	// Sleep first: the initial sweep lands one full interval after startup
	loop {
		tokio::time::sleep(SWEEP_INTERVAL).await;
		sweep(&state).await;
	}
}

pub async fn sweep(state: &AppState) {
	let mut window = state.window.lock().await;
	let evicted = window.evict_expired(OffsetDateTime::now_utc());
	if evicted > 0 {
		debug!("evicted {evicted} expired arrivals, count now {}", window.count());
	}
	// Save while still holding the lock; the snapshot matches what the sweep left
	if let Err(e) = snapshot::save(&state.cfg.snapshot_path, &window).await {
		warn!("snapshot save error: {e}");
	}
}

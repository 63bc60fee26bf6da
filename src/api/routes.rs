use axum::extract::State;
use time::OffsetDateTime;

use super::AppState;

pub async fn record_request(State(state): State<AppState>) -> String {
	let mut window = state.window.lock().await;
	let count = window.record(OffsetDateTime::now_utc());
	format!("Total requests in the last {} seconds: {}", window.window_secs(), count)
}

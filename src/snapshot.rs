use std::io::ErrorKind;
use std::path::Path;

use tracing::warn;

use crate::error::{SnapshotError, SnapshotResult};
use crate::window::{RequestWindow, DEFAULT_WINDOW_SECS};

#[derive(Debug)]
pub enum LoadedState {
	Recovered(RequestWindow),
	Fresh(RequestWindow),
}

pub async fn load(path: &Path) -> LoadedState {
	match read_snapshot(path).await {
		Ok(window) => LoadedState::Recovered(window),
		Err(SnapshotError::Io(e)) if e.kind() == ErrorKind::NotFound => {
			LoadedState::Fresh(RequestWindow::new(DEFAULT_WINDOW_SECS))
		}
		Err(e) => {
			warn!("Snapshot load error, starting fresh: {e}");
			LoadedState::Fresh(RequestWindow::new(DEFAULT_WINDOW_SECS))
		}
	}
}

pub async fn save(path: &Path, window: &RequestWindow) -> SnapshotResult<()> {
	let bytes = bincode::serialize(window).map_err(SnapshotError::Encode)?;
	tokio::fs::write(path, bytes).await?;
	Ok(())
}

async fn read_snapshot(path: &Path) -> SnapshotResult<RequestWindow> {
	let bytes = tokio::fs::read(path).await?;
	let window: RequestWindow = bincode::deserialize(&bytes).map_err(SnapshotError::Decode)?;
	if !window.is_consistent() {
		return Err(SnapshotError::Inconsistent {
			count: window.count(),
			len: window.arrivals().len(),
		});
	}
	Ok(window)
}

#[cfg(test)]
mod tests {
	use super::*;

	use std::path::PathBuf;

	use time::OffsetDateTime;
	use uuid::Uuid;

	fn temp_snapshot_path() -> PathBuf {
		std::env::temp_dir().join(format!("reqtally-test-{}.bin", Uuid::new_v4()))
	}

	fn populated_window() -> RequestWindow {
		let base = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
		let mut window = RequestWindow::new(DEFAULT_WINDOW_SECS);
		for i in 0..3 {
			window.record(base + time::Duration::seconds(i));
		}
		window
	}

	#[tokio::test]
	async fn test_load_missing_file_starts_fresh() {
		let path = temp_snapshot_path();
		match load(&path).await {
			LoadedState::Fresh(window) => {
				assert_eq!(window.count(), 0);
				assert!(window.is_empty());
				assert_eq!(window.window_secs(), DEFAULT_WINDOW_SECS);
			}
			LoadedState::Recovered(_) => panic!("missing file must yield a fresh state"),
		}
	}

	#[tokio::test]
	async fn test_load_garbage_starts_fresh() {
		let path = temp_snapshot_path();
		tokio::fs::write(&path, b"this is not a snapshot").await.unwrap();
		match load(&path).await {
			LoadedState::Fresh(window) => assert!(window.is_empty()),
			LoadedState::Recovered(_) => panic!("garbage must yield a fresh state"),
		}
		let _ = tokio::fs::remove_file(&path).await;
	}

	#[tokio::test]
	async fn test_load_truncated_snapshot_starts_fresh() {
		let path = temp_snapshot_path();
		save(&path, &populated_window()).await.unwrap();
		let bytes = tokio::fs::read(&path).await.unwrap();
		tokio::fs::write(&path, &bytes[..bytes.len() / 2]).await.unwrap();
		match load(&path).await {
			LoadedState::Fresh(window) => assert!(window.is_empty()),
			LoadedState::Recovered(_) => panic!("truncated file must yield a fresh state"),
		}
		let _ = tokio::fs::remove_file(&path).await;
	}

	#[tokio::test]
	async fn test_load_rejects_count_arrival_mismatch() {
		// Same field layout as RequestWindow, count out of step with arrivals
		let path = temp_snapshot_path();
		let forged = bincode::serialize(&(5u64, Vec::<u8>::new(), 60u64)).unwrap();
		tokio::fs::write(&path, forged).await.unwrap();
		match load(&path).await {
			LoadedState::Fresh(window) => assert_eq!(window.count(), 0),
			LoadedState::Recovered(_) => panic!("inconsistent snapshot must yield a fresh state"),
		}
		let _ = tokio::fs::remove_file(&path).await;
	}

	#[tokio::test]
	async fn test_round_trip_preserves_state() {
		let path = temp_snapshot_path();
		let window = populated_window();
		save(&path, &window).await.unwrap();
		match load(&path).await {
			LoadedState::Recovered(saved) => assert_eq!(saved, window),
			LoadedState::Fresh(_) => panic!("expected a recovered snapshot"),
		}
		let _ = tokio::fs::remove_file(&path).await;
	}

	#[tokio::test]
	async fn test_save_reports_write_failure() {
		let path = std::env::temp_dir()
			.join(format!("reqtally-missing-{}", Uuid::new_v4()))
			.join("snapshot.bin");
		let result = save(&path, &populated_window()).await;
		assert!(matches!(result, Err(SnapshotError::Io(_))));
	}
}

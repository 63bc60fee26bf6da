use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
	#[error("Snapshot I/O error: {0}")]
	Io(#[from] std::io::Error),
	#[error("Snapshot encode error: {0}")]
	Encode(#[source] bincode::Error),
	#[error("Snapshot decode error: {0}")]
	Decode(#[source] bincode::Error),
	#[error("Snapshot inconsistent: count {count} but {len} arrivals")]
	Inconsistent { count: u64, len: usize },
}

pub type SnapshotResult<T> = Result<T, SnapshotError>;

use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct AppConfig {
	pub host: String,
	pub port: u16,
	pub snapshot_path: PathBuf,
}

impl AppConfig {
	pub fn from_env() -> Self {
		Self {
			host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
			port: std::env::var("PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(8080),
			snapshot_path: std::env::var("SNAPSHOT_PATH")
				.map(PathBuf::from)
				.unwrap_or_else(|_| PathBuf::from("request_counter.bin")),
		}
	}
}

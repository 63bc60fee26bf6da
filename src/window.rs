use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

pub const DEFAULT_WINDOW_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestWindow {
	/// Always equal to arrivals.len(); persisted alongside it
	count: u64,
	arrivals: Vec<OffsetDateTime>,
	window_secs: u64,
}

impl RequestWindow {
	pub fn new(window_secs: u64) -> Self {
		Self { count: 0, arrivals: Vec::new(), window_secs }
	}

	pub fn record(&mut self, now: OffsetDateTime) -> u64 {
		self.arrivals.push(now);
		self.count += 1;
		self.count
	}

	pub fn evict_expired(&mut self, now: OffsetDateTime) -> usize {
		let window = Duration::seconds(self.window_secs as i64);
		let before = self.arrivals.len();
		// Every entry is checked, not just the oldest prefix
		self.arrivals.retain(|t| now - *t < window);
		self.count = self.arrivals.len() as u64;
		before - self.arrivals.len()
	}

	pub fn is_consistent(&self) -> bool {
		self.count as usize == self.arrivals.len()
	}

	pub fn count(&self) -> u64 {
		self.count
	}

	pub fn window_secs(&self) -> u64 {
		self.window_secs
	}

	pub fn arrivals(&self) -> &[OffsetDateTime] {
		&self.arrivals
	}

	pub fn is_empty(&self) -> bool {
		self.arrivals.is_empty()
	}
}

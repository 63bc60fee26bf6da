pub mod api;
pub mod config;
pub mod error;
pub mod snapshot;
pub mod tasks;
pub mod telemetry;
pub mod window;

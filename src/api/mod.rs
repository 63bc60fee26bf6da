use std::sync::Arc;

use axum::{routing::any, Router};
use tokio::sync::Mutex;
use tower_http::trace::TraceLayer;

use crate::{config::AppConfig, window::RequestWindow};

mod routes;

#[derive(Clone)]
pub struct AppState {
    pub window: Arc<Mutex<RequestWindow>>,
    pub cfg: AppConfig,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", any(routes::record_request))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

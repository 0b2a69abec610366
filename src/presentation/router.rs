// Route table for the dashboard API
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_dashboard, get_filter_options, health_check, reload_dataset};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/filters", get(get_filter_options))
        .route("/dataset/reload", post(reload_dataset))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{
    stats::{get_stats, get_tour_stats},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/pbp-stats", get(get_stats))
        .route("/api/pbp-stats/:type", get(get_tour_stats))
        .with_state(state)
}

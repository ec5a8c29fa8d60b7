use std::sync::Arc;

use axum::{Router, routing::post};

use crate::{state::AppState, waypoints::optimize_handler::optimize_handler};

pub fn waypoints_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/optimize-waypoints", post(optimize_handler))
        .with_state(state)
}

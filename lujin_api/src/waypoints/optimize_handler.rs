use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use lujin_optimizer::{
    json::types::{JsonOptimizeRequest, JsonOptimizeResponse, JsonWaypoints},
    optimize::optimize_waypoints,
};
use tracing::{Span, info, instrument};

use crate::{error::ApiError, state::AppState};

/// Reorders the posted waypoints into a greedy nearest-neighbour route that
/// starts at the first waypoint.
#[instrument(skip_all)]
pub async fn optimize_handler(
    State(state): State<Arc<AppState>>,
    body: Result<Json<JsonOptimizeRequest>, JsonRejection>,
) -> Result<Json<JsonOptimizeResponse>, ApiError> {
    let Json(body) = body?;
    let input = JsonWaypoints::parse(&body.waypoints)?;
    let params = state.optimize_params();

    let num_waypoints = input.len();

    // The session lives and dies inside the blocking task.
    let response = run_blocking(state.config.debug, move || {
        optimize_waypoints(input.waypoints(), &params).map(|route| {
            info!(
                waypoints = num_waypoints,
                route_length = route.len(),
                distance = route.distance(),
                "optimized waypoints"
            );
            input.to_response(&route)
        })
    })
    .await??;

    Ok(Json(response))
}

/// Runs `task` on the blocking pool inside the caller's span. A panic in the
/// task becomes an internal error.
pub(crate) async fn run_blocking<T, F>(debug: bool, task: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let span = Span::current();

    tokio::task::spawn_blocking(move || span.in_scope(task))
        .await
        .map_err(|error| ApiError::internal(error, debug))
}

use std::{any::Any, net::SocketAddr, sync::Arc};

use axum::{
    Router,
    http::Method,
    response::{IntoResponse, Response},
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any as AnyHeader, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::{
    config::{AppConfig, CorsOrigins},
    error::ApiError,
    state::AppState,
    waypoints::routes::waypoints_routes,
};

pub fn app(state: Arc<AppState>) -> Router {
    let router = Router::new().nest("/api", waypoints_routes(Arc::clone(&state)));
    with_layers(router, &state)
}

/// Wraps `router` in the panic, trace and CORS layers every route shares.
fn with_layers(router: Router, state: &AppState) -> Router {
    let debug = state.config.debug;

    let allow_origin = match state.config.cors_allow_origins {
        CorsOrigins::Any => AllowOrigin::any(),
    };

    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allow_origin)
        .allow_headers(AnyHeader);

    router.layer(
        ServiceBuilder::new()
            .layer(CatchPanicLayer::custom(
                move |panic: Box<dyn Any + Send + 'static>| handle_panic(panic, debug),
            ))
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer),
    )
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>, debug: bool) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        String::from("handler panicked")
    };

    ApiError::internal(detail, debug).into_response()
}

pub async fn serve(config: AppConfig) -> Result<(), anyhow::Error> {
    let address = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(AppState::new(config));

    let listener = TcpListener::bind(address).await?;
    info!(
        address = %listener.local_addr()?,
        debug = state.config.debug,
        solver_time_limit = %state.config.solver_time_limit,
        "listening"
    );

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}

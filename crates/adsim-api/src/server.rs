use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ApiConfig;
use crate::handlers;
use crate::state::AppState;

/// Create the API application router
pub fn create_app(state: AppState, config: &ApiConfig) -> Router {
    let router = Router::new()
        // Health and info
        .route("/health", get(handlers::health))
        .route("/v1/info", get(handlers::info))
        .route("/v1/status", get(handlers::get_status))

        // Form defaults
        .route("/v1/defaults", get(handlers::get_defaults))

        // Computation
        .route("/v1/compute", post(handlers::compute_scenario))
        .route("/v1/simulations", post(handlers::run_simulation))
        .route(
            "/v1/simulations/current",
            get(handlers::current_simulation).delete(handlers::reset_simulation),
        )

        .layer(TraceLayer::new_for_http());

    let router = if config.permissive_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(state)
}

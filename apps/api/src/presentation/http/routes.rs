use super::{
    handlers::{addresses, docs, health, societies},
    middleware::{logging::logging_middleware, request_id::request_id_middleware},
    state::AppState,
};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
};

pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.request_body_limit_bytes;

    let api_routes = Router::new()
        .route("/api/v1/docs", get(docs::api_docs))
        .route("/api/v1/societies", get(societies::list_societies))
        .route("/api/v1/societies/{name}", get(societies::get_society))
        .route("/api/v1/addresses/parse", post(addresses::parse_address))
        .route("/api/v1/addresses/parse/batch", post(addresses::parse_batch));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(api_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

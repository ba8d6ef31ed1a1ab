use crate::presentation::http::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthResponse {
    status: &'static str,
    societies: usize,
    service_radius_km: f64,
    version: &'static str,
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let societies = state.registry().len();
    let status = if societies > 0 { "healthy" } else { "unhealthy" };
    if societies == 0 {
        tracing::error!("Health check failed: society registry is empty");
    }

    let response = HealthResponse {
        status,
        societies,
        service_radius_km: state.resolver.settings().service_radius_km,
        version: env!("CARGO_PKG_VERSION"),
    };

    let code = if status == "healthy" {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(response))
}

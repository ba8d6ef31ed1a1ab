use axum::Json;

pub async fn api_docs() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Society Address Resolver API",
            "version": env!("CARGO_PKG_VERSION")
        },
        "paths": {
            "/health": { "get": { "summary": "Health check with registry size" } },
            "/api/v1/docs": { "get": { "summary": "OpenAPI spec" } },
            "/api/v1/societies": { "get": { "summary": "List registered societies" } },
            "/api/v1/societies/{name}": { "get": { "summary": "Get a registered society by name (case-insensitive)" } },
            "/api/v1/addresses/parse": { "post": { "summary": "Resolve coordinates and free-text address to society, block and flat" } },
            "/api/v1/addresses/parse/batch": { "post": { "summary": "Resolve imported rows keyed by column header, reporting per-row errors" } }
        }
    }))
}

use axum::Json;

pub async fn api_docs() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "openapi": "3.0.0",
        "info": {
            "title": "City API",
            "version": env!("CARGO_PKG_VERSION")
        },
        "components": {
            "securitySchemes": {
                "basicAuth": { "type": "http", "scheme": "basic" }
            }
        },
        "paths": {
            "/health": { "get": { "summary": "Health check" } },
            "/cities": {
                "get": {
                    "summary": "Get all cities",
                    "parameters": [
                        { "name": "pageNumber", "in": "query", "required": true, "schema": { "type": "integer", "minimum": 0 } },
                        { "name": "pageSize", "in": "query", "required": true, "schema": { "type": "integer", "minimum": 1, "maximum": 50 } }
                    ]
                }
            },
            "/cities/{name}": {
                "get": { "summary": "Find city by name" }
            },
            "/cities/{id}": {
                "put": {
                    "summary": "Update city",
                    "security": [{ "basicAuth": [] }]
                }
            },
            "/api-docs": { "get": { "summary": "OpenAPI spec" } }
        }
    }))
}

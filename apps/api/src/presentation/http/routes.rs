use super::{
    handlers::{cities, docs, health},
    middleware::basic_auth::basic_auth_middleware,
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{Router, middleware, routing::get};
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let city_routes = Router::new()
        .route("/cities", get(cities::get_all_cities))
        .route(
            "/cities/{key}",
            get(cities::get_city).put(cities::update_city),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            basic_auth_middleware,
        ));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/api-docs", get(docs::api_docs))
        .merge(city_routes)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

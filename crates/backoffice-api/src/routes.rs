//! Router for the back-office HTTP surface

use axum::{
    routing::get,
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use backoffice_shared::constants::API_PREFIX;

use crate::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Public routes
    let health_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/ready", get(handlers::health::readiness_check));

    // Menu catalog
    let menu_routes = Router::new()
        .route(
            "/menu",
            get(handlers::menu::list_menu).post(handlers::menu::create_menu),
        )
        .route("/menu/counts", get(handlers::menu::menu_counts))
        .route("/menu/events", get(handlers::events::menu_events))
        .route(
            "/menu/{id}",
            get(handlers::menu::get_menu)
                .put(handlers::menu::update_menu)
                .delete(handlers::menu::delete_menu),
        );

    Router::new()
        .merge(health_routes)
        .nest(API_PREFIX, menu_routes)
        .with_state(state)
        // CORS
        .layer(
            CorsLayer::permissive()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        // Tracing
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
}

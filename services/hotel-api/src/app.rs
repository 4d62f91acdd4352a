//! Hotel API HTTP application wiring.
//!
//! # Purpose
//! Builds the Axum router, configures middleware, and defines the shared
//! application state injected into handlers.
//!
//! # Notes
//! This module centralizes route composition to keep `main` small and testable.
use crate::api;
use crate::api::openapi::ApiDoc;
use crate::observability;
use crate::service::HotelService;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_opentelemetry::OpenTelemetrySpanExt;
use utoipa::OpenApi;

#[derive(Clone)]
pub struct AppState {
    pub api_version: String,
    pub hotels: HotelService,
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
            let parent = observability::trace_context_from_headers(request.headers());
            let span = tracing::info_span!(
                "http.request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version()
            );
            span.set_parent(parent);
            span
        });

    Router::new()
        .route(
            "/api/system/info",
            axum::routing::get(api::system::system_info),
        )
        .route(
            "/api/system/health",
            axum::routing::get(api::system::system_health),
        )
        .route(
            "/api/hotels",
            axum::routing::get(api::hotels::list_hotels).post(api::hotels::create_hotel),
        )
        .route(
            "/api/hotels/:id",
            axum::routing::get(api::hotels::get_hotel)
                .put(api::hotels::update_hotel)
                .delete(api::hotels::delete_hotel),
        )
        .merge(
            utoipa_swagger_ui::SwaggerUi::new("/docs").url("/api/openapi.json", ApiDoc::openapi()),
        )
        .layer(CorsLayer::permissive())
        .layer(trace_layer)
        .with_state(state)
}

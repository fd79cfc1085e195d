// src/presentation/http/routes.rs
use crate::config::AppConfig;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{controllers::articles, middleware, openapi};
use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method},
    routing::{get, put},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, true)
}

pub fn build_router_with_rate_limiter(state: HttpState, rate_limited: bool) -> Router {
    let mut api = Router::new()
        .route(
            "/api/v1/articles",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/api/v1/articles/{id}",
            put(articles::update_article).delete(articles::delete_article),
        );

    if rate_limited {
        api = api.layer(middleware::rate_limit::rate_limit_layer());
    }

    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer())
        .layer(Extension(state))
}

fn cors_layer() -> CorsLayer {
    let origins = AppConfig::allowed_origins_from_env();

    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    if origins.iter().any(|origin| origin == "*") {
        layer.allow_origin(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        layer.allow_origin(parsed)
    }
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> Json<openapi::StatusResponse> {
    Json(openapi::StatusResponse {
        status: "ok".into(),
    })
}

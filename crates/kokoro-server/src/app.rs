use crate::{AppConfig, routes};
use axum::{Extension, Router};
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderValue, Method};
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

fn cors(origins: Vec<String>) -> anyhow::Result<CorsLayer> {
    if origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }
    let origins = origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_credentials(true))
}

pub(crate) fn create_app(
    conn: DatabaseConnection,
    config: AppConfig,
    origins: Vec<String>,
) -> anyhow::Result<Router> {
    let router = Router::new()
        .merge(routes::status::create_router())
        .merge(routes::therapists::create_router())
        .merge(routes::assessments::create_router())
        .merge(routes::swagger::create_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors(origins)?)
                .layer(Extension(conn))
                .layer(Extension(config)),
        );
    Ok(router)
}

use axum::Json;
use axum::response::IntoResponse;
use axum::routing::{Router, get};
use serde_derive::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct Status {
    status: &'static str,
}

pub(crate) fn create_router() -> Router {
    Router::new().route("/status", get(get_status))
}

#[utoipa::path(
    get,
    path = "/status",
    responses(
        (status = OK, body = Status, description = "Liveness probe"),
    ),
    tag = "status"
)]
pub(crate) async fn get_status() -> impl IntoResponse {
    Json(Status { status: "ok" })
}

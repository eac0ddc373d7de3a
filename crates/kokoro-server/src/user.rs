use axum::extract::FromRequestParts;
use axum::{Extension, RequestPartsExt};
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use http::StatusCode;
use http::request::Parts;
use kokoro_db::user;
use sea_orm::DatabaseConnection;
use std::error::Error;
use uuid::Uuid;

type Rejection = (StatusCode, &'static str);

/// Resolves the request's bearer token to an authenticated user id. Token
/// issuance belongs to the auth service; this backend only looks tokens up.
#[derive(Clone)]
pub(crate) struct ExtractUserId(pub Uuid);

impl<S> FromRequestParts<S> for ExtractUserId
where
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| (StatusCode::UNAUTHORIZED, "No authentication token provided"))?;

        let Extension::<DatabaseConnection>(conn) =
            parts.extract::<Extension<DatabaseConnection>>().await.map_err(|error| {
                tracing::error!(error = &error as &dyn Error, "database connection not found in app data");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database connection not found")
            })?;

        let user = user::query::Query::find_by_token(&conn, bearer.token())
            .await
            .map_err(|error| {
                tracing::error!(error = &error as &dyn Error, "failed to resolve access token");
                (StatusCode::INTERNAL_SERVER_ERROR, "Error loading user")
            })?;

        let Some(user) = user else {
            return Err((StatusCode::UNAUTHORIZED, "Authentication failed."));
        };
        Ok(Self(user.id))
    }
}

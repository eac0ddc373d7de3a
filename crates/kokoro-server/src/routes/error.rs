use serde_derive::Serialize;
use std::borrow::Cow;
use utoipa::ToSchema;

/// The `{ "error": "..." }` body every failing endpoint answers with.
#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ErrorBody {
    pub(crate) error: Cow<'static, str>,
}

impl ErrorBody {
    pub(crate) fn new<E: Into<Cow<'static, str>>>(error: E) -> Self {
        Self { error: error.into() }
    }
}

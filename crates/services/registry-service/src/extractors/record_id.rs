//! Numeric record id taken from the `{id}` path segment.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use common::AppError;

/// Record id extractor; anything but an integer is a client error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bad_argument("empty index"))?;

        parse_id(&raw).map(RecordId)
    }
}

fn parse_id(raw: &str) -> Result<i32, AppError> {
    if raw.is_empty() {
        return Err(AppError::bad_argument("empty index"));
    }
    raw.parse()
        .map_err(|_| AppError::bad_argument("requested numeric format"))
}

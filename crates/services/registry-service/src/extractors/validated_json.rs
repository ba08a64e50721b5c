//! Validated JSON extractor.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use common::AppError;

/// JSON extractor that decodes and validates the payload.
///
/// The body is decoded regardless of the `Content-Type` header; a body that
/// is not the expected JSON shape becomes [`AppError::Decode`], a decoded
/// body that fails its `validator` rules becomes [`AppError::Validation`].
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::decode(e.body_text()))?;

        let value: T = serde_json::from_slice(&body).map_err(|e| AppError::decode(e.to_string()))?;

        // Validate
        value.validate().map_err(|e| {
            // Report the failing field that sorts first by name
            let message = e
                .field_errors()
                .into_iter()
                .min_by(|(a, _), (b, _)| a.cmp(b))
                .and_then(|(_, errors)| errors.first())
                .and_then(|error| error.message.as_ref())
                .map(|msg| msg.to_string())
                .unwrap_or_else(|| "Validation failed".to_string());
            AppError::validation(message)
        })?;

        Ok(ValidatedJson(value))
    }
}

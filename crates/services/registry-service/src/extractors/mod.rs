//! Custom axum extractors.

mod record_id;
mod validated_json;

pub use record_id::RecordId;
pub use validated_json::ValidatedJson;

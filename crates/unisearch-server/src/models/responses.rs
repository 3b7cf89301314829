//! Error response bodies

use serde::Serialize;
use utoipa::ToSchema;

/// Body of 403 and 422 responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDetail {
    #[schema(example = "Invalid API Key")]
    pub detail: String,
}

/// Body of 500 responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorMessage {
    #[schema(example = "Internal Error")]
    pub error: String,
}

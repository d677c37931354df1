use serde::Serialize;
use utoipa::ToSchema;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Response data
    pub data: T,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "NOT_FOUND")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Contact message not found")]
    pub message: String,
}

/// Body of the bulk read/unread endpoints.
#[derive(Serialize, ToSchema)]
pub struct MarkMessagesBody {
    pub ids: Vec<uuid::Uuid>,
}

/// Number of rows a bulk endpoint changed.
#[derive(Serialize, ToSchema)]
pub struct UpdatedCount {
    #[schema(example = 2)]
    pub updated: u64,
}

//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic and do not derive `ToSchema`. These
//! wrappers mirror their wire shape and exist only for documentation.

#![expect(
    dead_code,
    reason = "Schema wrappers are used only for OpenAPI generation via utoipa"
)]

use utoipa::ToSchema;

/// Stable machine-readable error codes.
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// API error payload.
#[derive(ToSchema)]
#[schema(as = Error)]
#[schema(rename_all = "camelCase")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message.
    #[schema(example = "guest payload failed validation")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "6a0d4a34-0d0b-4d8e-9f5b-1a2b3c4d5e6f")]
    trace_id: Option<String>,
    /// Structured details, e.g. `{"fieldErrors": {"first_name": ["This field is required."]}}`.
    details: Option<serde_json::Value>,
}

/// A stored guest.
#[derive(ToSchema)]
#[schema(as = Guest)]
pub struct GuestSchema {
    #[schema(example = 7)]
    id: i64,
    #[schema(example = "Ada", max_length = 255)]
    first_name: String,
    #[schema(example = "Lovelace", max_length = 255)]
    last_name: String,
}

/// Body for `POST` and `PUT`. Both names are required; `id` is ignored.
#[derive(ToSchema)]
#[schema(as = GuestBody)]
pub struct GuestBodySchema {
    #[schema(example = "Ada", max_length = 255)]
    first_name: String,
    #[schema(example = "Lovelace", max_length = 255)]
    last_name: String,
}

/// Body for `PATCH`. Omitted names are left unchanged.
#[derive(ToSchema)]
#[schema(as = GuestPatchBody)]
pub struct GuestPatchSchema {
    #[schema(max_length = 255)]
    first_name: Option<String>,
    #[schema(max_length = 255)]
    last_name: Option<String>,
}

/// One page of guests, ordered by last name then first name.
#[derive(ToSchema)]
#[schema(as = GuestPage)]
pub struct GuestPageSchema {
    /// Total guests across all pages.
    #[schema(example = 150)]
    count: u64,
    /// Absolute URL of the next page.
    #[schema(example = "http://localhost:8080/guests/?page=2")]
    next: Option<String>,
    /// Absolute URL of the previous page.
    previous: Option<String>,
    results: Vec<GuestSchema>,
}

/// A wedding invitation.
#[derive(ToSchema)]
#[schema(as = Invitation)]
pub struct InvitationSchema {
    #[schema(example = 1)]
    id: i64,
    /// Public lookup token.
    #[schema(example = "6a0d4a34-0d0b-4d8e-9f5b-1a2b3c4d5e6f")]
    uuid: uuid::Uuid,
    #[schema(example = "Ada & Charles")]
    guest_names: String,
    is_plural: bool,
    #[schema(example = "2025-06-14T12:00:00Z")]
    created_at: chrono::DateTime<chrono::Utc>,
}

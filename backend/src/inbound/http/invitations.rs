//! Public invitation lookup.
//!
//! ```text
//! GET /guests/invitations/by-uuid/6a0d4a34-0d0b-4d8e-9f5b-1a2b3c4d5e6f/
//! ```
//!
//! Invitations are created and removed administratively; the only HTTP
//! operation is this lookup by token.

use actix_web::{get, web};

use crate::domain::{Invitation, InvitationToken};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, InvitationSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid};

/// Fetch an invitation by its public token.
#[utoipa::path(
    get,
    path = "/guests/invitations/by-uuid/{uuid}/",
    params(("uuid" = uuid::Uuid, Path, description = "Invitation token")),
    responses(
        (status = 200, description = "Invitation", body = InvitationSchema),
        (status = 400, description = "Malformed token", body = ErrorSchema),
        (status = 404, description = "Invitation not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["invitations"],
    operation_id = "getInvitationByUuid"
)]
#[get("/invitations/by-uuid/{uuid}/")]
pub async fn get_invitation_by_uuid(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Invitation>> {
    let uuid = parse_uuid(path.into_inner(), FieldName::new("uuid"))?;
    let invitation = state
        .invitations
        .find_invitation(InvitationToken::from_uuid(uuid))
        .await?;
    Ok(web::Json(invitation))
}

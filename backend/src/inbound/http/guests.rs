//! Guest CRUD handlers.
//!
//! ```text
//! GET    /guests/?page=2
//! POST   /guests/        {"first_name":"Ada","last_name":"Lovelace"}
//! GET    /guests/7/
//! PUT    /guests/7/      {"first_name":"Ada","last_name":"King"}
//! PATCH  /guests/7/      {"last_name":"King"}
//! DELETE /guests/7/
//! ```
//!
//! Paths are relative to the `/guests` scope assembled in
//! [`super::routes`].

use std::num::NonZeroU64;

use actix_web::{HttpRequest, HttpResponse, delete, get, patch, post, put, web};
use pagination::{Page, PageRequest};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use utoipa::IntoParams;

use crate::domain::{Error, Guest, GuestDraft, GuestId, GuestPatch, RawField};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{
    ErrorSchema, GuestBodySchema, GuestPageSchema, GuestPatchSchema, GuestSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::expected_object_error;

/// Guests per list page.
pub const GUEST_PAGE_SIZE: NonZeroU64 = match NonZeroU64::new(100) {
    Some(size) => size,
    None => panic!("guest page size must be non-zero"),
};

/// Query string accepted by the list endpoint.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListGuestsQuery {
    /// 1-based page number, or `last`.
    #[param(example = "2")]
    pub page: Option<String>,
}

fn raw_field(value: Option<Value>) -> RawField {
    match value {
        None => RawField::Missing,
        Some(Value::Null) => RawField::Null,
        Some(Value::String(text)) => RawField::Text(text),
        Some(Value::Number(number)) => RawField::Text(number.to_string()),
        Some(Value::Bool(_) | Value::Array(_) | Value::Object(_)) => RawField::Invalid,
    }
}

/// Split a request body into the two name fields, ignoring anything else.
fn name_fields(payload: Value) -> Result<(RawField, RawField), Error> {
    let mut body = match payload {
        Value::Object(body) => body,
        other => return Err(expected_object_error(&other)),
    };
    Ok((
        raw_field(body.remove("first_name")),
        raw_field(body.remove("last_name")),
    ))
}

fn draft_from(payload: Value) -> Result<GuestDraft, Error> {
    let (first_name, last_name) = name_fields(payload)?;
    Ok(GuestDraft::validate(first_name, last_name)?)
}

/// List guests ordered by last name, then first name.
#[utoipa::path(
    get,
    path = "/guests/",
    params(ListGuestsQuery),
    responses(
        (status = 200, description = "One page of guests", body = GuestPageSchema),
        (status = 404, description = "Invalid page", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["guests"],
    operation_id = "listGuests"
)]
#[get("/")]
pub async fn list_guests(
    state: web::Data<HttpState>,
    query: web::Query<ListGuestsQuery>,
    req: HttpRequest,
) -> ApiResult<web::Json<Page<Guest>>> {
    let request = PageRequest::from_query(query.page.as_deref(), GUEST_PAGE_SIZE).map_err(|err| {
        debug!(error = %err, "rejected page selector");
        Error::not_found("Invalid page.")
    })?;
    let paged = state.guests.list_guests(request).await?;
    Ok(web::Json(Page::from_paged(paged, &req.full_url())))
}

/// Create a guest.
#[utoipa::path(
    post,
    path = "/guests/",
    request_body = GuestBodySchema,
    responses(
        (status = 201, description = "Created guest", body = GuestSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["guests"],
    operation_id = "createGuest"
)]
#[post("/")]
pub async fn create_guest(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let draft = draft_from(payload.into_inner())?;
    let guest = state.guest_commands.create_guest(draft).await?;
    Ok(HttpResponse::Created().json(guest))
}

/// Fetch one guest.
#[utoipa::path(
    get,
    path = "/guests/{id}/",
    params(("id" = i64, Path, description = "Guest identifier")),
    responses(
        (status = 200, description = "Guest", body = GuestSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["guests"],
    operation_id = "getGuest"
)]
#[get("/{id:\\d+}/")]
pub async fn get_guest(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<Guest>> {
    let guest = state.guests.get_guest(GuestId::new(path.into_inner())).await?;
    Ok(web::Json(guest))
}

/// Replace both names of a guest.
#[utoipa::path(
    put,
    path = "/guests/{id}/",
    params(("id" = i64, Path, description = "Guest identifier")),
    request_body = GuestBodySchema,
    responses(
        (status = 200, description = "Updated guest", body = GuestSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["guests"],
    operation_id = "replaceGuest"
)]
#[put("/{id:\\d+}/")]
pub async fn replace_guest(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<Guest>> {
    let draft = draft_from(payload.into_inner())?;
    let guest = state
        .guest_commands
        .replace_guest(GuestId::new(path.into_inner()), draft)
        .await?;
    Ok(web::Json(guest))
}

/// Update only the supplied names.
#[utoipa::path(
    patch,
    path = "/guests/{id}/",
    params(("id" = i64, Path, description = "Guest identifier")),
    request_body = GuestPatchSchema,
    responses(
        (status = 200, description = "Updated guest", body = GuestSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["guests"],
    operation_id = "patchGuest"
)]
#[patch("/{id:\\d+}/")]
pub async fn patch_guest(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<Guest>> {
    let (first_name, last_name) = name_fields(payload.into_inner())?;
    let patch = GuestPatch::validate(first_name, last_name)?;
    let guest = state
        .guest_commands
        .patch_guest(GuestId::new(path.into_inner()), patch)
        .await?;
    Ok(web::Json(guest))
}

/// Delete a guest.
#[utoipa::path(
    delete,
    path = "/guests/{id}/",
    params(("id" = i64, Path, description = "Guest identifier")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not found", body = ErrorSchema)
    ),
    tags = ["guests"],
    operation_id = "deleteGuest"
)]
#[delete("/{id:\\d+}/")]
pub async fn delete_guest(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .guest_commands
        .delete_guest(GuestId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

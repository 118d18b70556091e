//! Internal Diesel row structs.
//!
//! These never leave the persistence layer; repositories convert them to
//! domain types.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{guest, invitation};

/// Row read from `guest`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = guest)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct GuestRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// Insertable guest.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = guest)]
pub(crate) struct NewGuestRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
}

/// Changeset for full and partial updates; `None` columns are left alone.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = guest)]
pub(crate) struct GuestChangeset<'a> {
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
}

/// Row read from `invitation`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = invitation)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct InvitationRow {
    pub id: i64,
    pub uuid: Uuid,
    pub guest_names: String,
    pub is_plural: bool,
    pub created_at: DateTime<Utc>,
}

/// Insertable invitation.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = invitation)]
pub(crate) struct NewInvitationRow<'a> {
    pub uuid: Uuid,
    pub guest_names: &'a str,
    pub is_plural: bool,
    pub created_at: DateTime<Utc>,
}

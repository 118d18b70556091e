//! PostgreSQL-backed `InvitationRepository`.
//!
//! Inserts take a `SHARE ROW EXCLUSIVE` lock on the table for the length of
//! their transaction. Writers therefore commit one at a time, so serial ids
//! and clamped `created_at` values both follow commit order. Readers are not
//! blocked.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::dsl::max;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};

use crate::domain::ports::{InvitationRepository, InvitationRepositoryError};
use crate::domain::{Invitation, InvitationDraft, InvitationId, InvitationToken};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{InvitationRow, NewInvitationRow};
use super::pool::{DbPool, PoolError};
use super::schema::invitation;

/// Diesel-backed invitation store.
#[derive(Clone)]
pub struct DieselInvitationRepository {
    pool: DbPool,
}

impl DieselInvitationRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> InvitationRepositoryError {
    map_basic_pool_error(error, InvitationRepositoryError::connection)
}

fn map_diesel_error(error: DieselError) -> InvitationRepositoryError {
    map_basic_diesel_error(
        error,
        InvitationRepositoryError::query,
        InvitationRepositoryError::connection,
    )
}

fn map_insert_error(error: DieselError, token: InvitationToken) -> InvitationRepositoryError {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            InvitationRepositoryError::duplicate_token(token.to_string())
        }
        other => map_diesel_error(other),
    }
}

async fn insert_in_order(
    conn: &mut AsyncPgConnection,
    draft: &InvitationDraft,
) -> Result<InvitationRow, DieselError> {
    diesel::sql_query("LOCK TABLE invitation IN SHARE ROW EXCLUSIVE MODE")
        .execute(conn)
        .await?;
    let latest: Option<DateTime<Utc>> = invitation::table
        .select(max(invitation::created_at))
        .get_result(conn)
        .await?;
    let created_at = latest.map_or(draft.created_at, |latest| latest.max(draft.created_at));

    diesel::insert_into(invitation::table)
        .values(&NewInvitationRow {
            uuid: *draft.uuid.as_uuid(),
            guest_names: &draft.guest_names,
            is_plural: draft.is_plural,
            created_at,
        })
        .returning(InvitationRow::as_returning())
        .get_result(conn)
        .await
}

fn row_to_invitation(row: InvitationRow) -> Invitation {
    Invitation {
        id: InvitationId::new(row.id),
        uuid: InvitationToken::from_uuid(row.uuid),
        guest_names: row.guest_names,
        is_plural: row.is_plural,
        created_at: row.created_at,
    }
}

#[async_trait]
impl InvitationRepository for DieselInvitationRepository {
    async fn insert(&self, draft: &InvitationDraft) -> Result<Invitation, InvitationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = conn
            .transaction(|conn| insert_in_order(conn, draft).scope_boxed())
            .await
            .map_err(|err| map_insert_error(err, draft.uuid))?;
        Ok(row_to_invitation(row))
    }

    async fn find_by_token(
        &self,
        token: InvitationToken,
    ) -> Result<Option<Invitation>, InvitationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = invitation::table
            .filter(invitation::uuid.eq(token.as_uuid()))
            .select(InvitationRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(row_to_invitation))
    }

    async fn list_newest_first(&self) -> Result<Vec<Invitation>, InvitationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<InvitationRow> = invitation::table
            .select(InvitationRow::as_select())
            .order_by((invitation::created_at.desc(), invitation::id.desc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(row_to_invitation).collect())
    }

    async fn delete_by_token(
        &self,
        token: InvitationToken,
    ) -> Result<bool, InvitationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(invitation::table.filter(invitation::uuid.eq(token.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(removed > 0)
    }
}

//! PostgreSQL-backed `GuestRepository`.
//!
//! Listing counts and slices inside one read-only `REPEATABLE READ`
//! transaction, so the reported total matches the rows returned even while
//! other requests write.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use pagination::{PageRequest, PageWindow, Paged, PaginationError};

use crate::domain::ports::{GuestRepository, GuestRepositoryError};
use crate::domain::{Guest, GuestDraft, GuestId, GuestName, GuestPatch};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{GuestChangeset, GuestRow, NewGuestRow};
use super::pool::{DbPool, PoolError};
use super::schema::guest;

/// Diesel-backed guest store.
#[derive(Clone)]
pub struct DieselGuestRepository {
    pool: DbPool,
}

impl DieselGuestRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> GuestRepositoryError {
    map_basic_pool_error(error, GuestRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> GuestRepositoryError {
    map_basic_diesel_error(
        error,
        GuestRepositoryError::query,
        GuestRepositoryError::connection,
    )
}

/// Failures inside the listing transaction.
enum ListFailure {
    Diesel(diesel::result::Error),
    Page(PaginationError),
}

impl From<diesel::result::Error> for ListFailure {
    fn from(error: diesel::result::Error) -> Self {
        Self::Diesel(error)
    }
}

impl From<ListFailure> for GuestRepositoryError {
    fn from(failure: ListFailure) -> Self {
        match failure {
            ListFailure::Diesel(error) => map_diesel_error(error),
            ListFailure::Page(error) => GuestRepositoryError::invalid_page(error.to_string()),
        }
    }
}

fn row_to_guest(row: GuestRow) -> Result<Guest, GuestRepositoryError> {
    let first_name = GuestName::new(row.first_name)
        .map_err(|err| GuestRepositoryError::query(format!("stored first_name: {err}")))?;
    let last_name = GuestName::new(row.last_name)
        .map_err(|err| GuestRepositoryError::query(format!("stored last_name: {err}")))?;
    Ok(Guest {
        id: GuestId::new(row.id),
        first_name,
        last_name,
    })
}

fn to_sql_bound(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

async fn count_and_slice(
    conn: &mut AsyncPgConnection,
    request: PageRequest,
) -> Result<(Vec<GuestRow>, u64, PageWindow), ListFailure> {
    let total: i64 = guest::table.count().get_result(conn).await?;
    let total = u64::try_from(total).unwrap_or(0);
    let window = request.window(total).map_err(ListFailure::Page)?;

    let rows = guest::table
        .select(GuestRow::as_select())
        .order_by((guest::last_name.asc(), guest::first_name.asc(), guest::id.asc()))
        .offset(to_sql_bound(window.offset()))
        .limit(to_sql_bound(window.limit()))
        .load(conn)
        .await?;
    Ok((rows, total, window))
}

impl DieselGuestRepository {
    async fn update_returning(
        &self,
        id: GuestId,
        changes: GuestChangeset<'_>,
    ) -> Result<Option<Guest>, GuestRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::update(guest::table.find(id.get()))
            .set(&changes)
            .returning(GuestRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_guest).transpose()
    }
}

#[async_trait]
impl GuestRepository for DieselGuestRepository {
    async fn list(&self, request: PageRequest) -> Result<Paged<Guest>, GuestRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let (rows, total, window) = conn
            .build_transaction()
            .read_only()
            .repeatable_read()
            .run(|conn| count_and_slice(conn, request).scope_boxed())
            .await?;

        let items = rows
            .into_iter()
            .map(row_to_guest)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Paged::new(items, total, window))
    }

    async fn find_by_id(&self, id: GuestId) -> Result<Option<Guest>, GuestRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = guest::table
            .find(id.get())
            .select(GuestRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_guest).transpose()
    }

    async fn insert(&self, draft: &GuestDraft) -> Result<Guest, GuestRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(guest::table)
            .values(&NewGuestRow {
                first_name: draft.first_name.as_str(),
                last_name: draft.last_name.as_str(),
            })
            .returning(GuestRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        row_to_guest(row)
    }

    async fn replace(
        &self,
        id: GuestId,
        draft: &GuestDraft,
    ) -> Result<Option<Guest>, GuestRepositoryError> {
        self.update_returning(
            id,
            GuestChangeset {
                first_name: Some(draft.first_name.as_str()),
                last_name: Some(draft.last_name.as_str()),
            },
        )
        .await
    }

    async fn patch(
        &self,
        id: GuestId,
        patch: &GuestPatch,
    ) -> Result<Option<Guest>, GuestRepositoryError> {
        // An empty changeset is a Diesel error, so a no-op patch is a read.
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }
        self.update_returning(
            id,
            GuestChangeset {
                first_name: patch.first_name.as_ref().map(GuestName::as_str),
                last_name: patch.last_name.as_ref().map(GuestName::as_str),
            },
        )
        .await
    }

    async fn delete(&self, id: GuestId) -> Result<bool, GuestRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let removed = diesel::delete(guest::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn rows_become_guests() {
        let guest = row_to_guest(GuestRow {
            id: 3,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
        })
        .expect("valid row");
        assert_eq!(guest.id, GuestId::new(3));
        assert_eq!(guest.to_string(), "Ada Lovelace");
    }

    #[rstest]
    fn overlong_stored_names_are_query_errors() {
        let err = row_to_guest(GuestRow {
            id: 3,
            first_name: "x".repeat(300),
            last_name: "Lovelace".into(),
        })
        .expect_err("overlong name");
        assert!(matches!(err, GuestRepositoryError::Query { .. }));
    }

    #[rstest]
    fn page_failures_map_to_invalid_page() {
        let failure = ListFailure::Page(PaginationError::OutOfRange {
            requested: 4,
            last: 2,
        });
        let err = GuestRepositoryError::from(failure);
        assert!(matches!(err, GuestRepositoryError::InvalidPage { .. }));
    }
}

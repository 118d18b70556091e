//! Driven port for guest persistence.
//!
//! Every method is one atomic store operation. Listing counts and slices
//! inside the same transaction so `count` and `results` always agree.

use async_trait::async_trait;
use pagination::{PageRequest, Paged};

use crate::domain::{Guest, GuestDraft, GuestId, GuestPatch};

use super::define_port_error;

define_port_error! {
    /// Errors raised by guest repository adapters.
    pub enum GuestRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "guest repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "guest repository query failed: {message}",
        /// The requested page does not exist.
        InvalidPage { message: String } =>
            "invalid page: {message}",
    }
}

/// Port for guest storage.
///
/// Listing order is `last_name`, then `first_name`, then `id`, all ascending.
/// Mutations that target a missing id return `Ok(None)` or `Ok(false)`
/// rather than an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GuestRepository: Send + Sync {
    /// Count all guests and return the requested page.
    async fn list(&self, request: PageRequest) -> Result<Paged<Guest>, GuestRepositoryError>;

    /// Fetch one guest.
    async fn find_by_id(&self, id: GuestId) -> Result<Option<Guest>, GuestRepositoryError>;

    /// Insert a guest and return it with its assigned id.
    async fn insert(&self, draft: &GuestDraft) -> Result<Guest, GuestRepositoryError>;

    /// Overwrite both names.
    async fn replace(
        &self,
        id: GuestId,
        draft: &GuestDraft,
    ) -> Result<Option<Guest>, GuestRepositoryError>;

    /// Overwrite the names present in `patch`.
    async fn patch(
        &self,
        id: GuestId,
        patch: &GuestPatch,
    ) -> Result<Option<Guest>, GuestRepositoryError>;

    /// Delete a guest, reporting whether a row was removed.
    async fn delete(&self, id: GuestId) -> Result<bool, GuestRepositoryError>;
}

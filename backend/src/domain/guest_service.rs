//! Guest domain service implementing the guest driving ports.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{PageRequest, Paged};
use tracing::{debug, info};

use crate::domain::ports::{GuestRepository, GuestRepositoryError, GuestsCommand, GuestsQuery};
use crate::domain::{Error, Guest, GuestDraft, GuestId, GuestPatch};

const GUEST_NOT_FOUND: &str = "Not found.";
const INVALID_PAGE: &str = "Invalid page.";

/// Guest service backed by a [`GuestRepository`].
#[derive(Clone)]
pub struct GuestService<R> {
    repo: Arc<R>,
}

impl<R> GuestService<R> {
    /// Create a new service over the given repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

fn map_repository_error(error: GuestRepositoryError) -> Error {
    match error {
        GuestRepositoryError::Connection { .. } | GuestRepositoryError::Query { .. } => {
            Error::internal(error.to_string())
        }
        GuestRepositoryError::InvalidPage { message } => {
            debug!(%message, "rejected page request");
            Error::not_found(INVALID_PAGE)
        }
    }
}

fn found(guest: Option<Guest>) -> Result<Guest, Error> {
    guest.ok_or_else(|| Error::not_found(GUEST_NOT_FOUND))
}

#[async_trait]
impl<R> GuestsQuery for GuestService<R>
where
    R: GuestRepository,
{
    async fn list_guests(&self, request: PageRequest) -> Result<Paged<Guest>, Error> {
        self.repo.list(request).await.map_err(map_repository_error)
    }

    async fn get_guest(&self, id: GuestId) -> Result<Guest, Error> {
        found(
            self.repo
                .find_by_id(id)
                .await
                .map_err(map_repository_error)?,
        )
    }
}

#[async_trait]
impl<R> GuestsCommand for GuestService<R>
where
    R: GuestRepository,
{
    async fn create_guest(&self, draft: GuestDraft) -> Result<Guest, Error> {
        let guest = self
            .repo
            .insert(&draft)
            .await
            .map_err(map_repository_error)?;
        info!(guest_id = %guest.id, "guest created");
        Ok(guest)
    }

    async fn replace_guest(&self, id: GuestId, draft: GuestDraft) -> Result<Guest, Error> {
        found(
            self.repo
                .replace(id, &draft)
                .await
                .map_err(map_repository_error)?,
        )
    }

    async fn patch_guest(&self, id: GuestId, patch: GuestPatch) -> Result<Guest, Error> {
        found(
            self.repo
                .patch(id, &patch)
                .await
                .map_err(map_repository_error)?,
        )
    }

    async fn delete_guest(&self, id: GuestId) -> Result<(), Error> {
        if self.repo.delete(id).await.map_err(map_repository_error)? {
            info!(guest_id = %id, "guest deleted");
            Ok(())
        } else {
            Err(Error::not_found(GUEST_NOT_FOUND))
        }
    }
}

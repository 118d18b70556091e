//! Driving port for guest mutations.

use async_trait::async_trait;

use crate::domain::{Error, Guest, GuestDraft, GuestId, GuestPatch};

/// Use-case port for creating, updating and deleting guests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GuestsCommand: Send + Sync {
    /// Store a new guest.
    async fn create_guest(&self, draft: GuestDraft) -> Result<Guest, Error>;

    /// Replace both names of an existing guest.
    async fn replace_guest(&self, id: GuestId, draft: GuestDraft) -> Result<Guest, Error>;

    /// Update only the supplied names.
    async fn patch_guest(&self, id: GuestId, patch: GuestPatch) -> Result<Guest, Error>;

    /// Remove a guest permanently.
    async fn delete_guest(&self, id: GuestId) -> Result<(), Error>;
}

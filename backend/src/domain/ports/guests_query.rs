//! Driving port for reading guests.
//!
//! HTTP handlers depend on this trait rather than on the repository so they
//! stay free of persistence concerns.

use async_trait::async_trait;
use pagination::{PageRequest, Paged};

use crate::domain::{Error, Guest, GuestId};

/// Use-case port for guest reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GuestsQuery: Send + Sync {
    /// One page of guests in listing order.
    async fn list_guests(&self, request: PageRequest) -> Result<Paged<Guest>, Error>;

    /// A single guest, or `not_found`.
    async fn get_guest(&self, id: GuestId) -> Result<Guest, Error>;
}

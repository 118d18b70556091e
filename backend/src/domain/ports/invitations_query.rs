//! Driving port for reading invitations.

use async_trait::async_trait;

use crate::domain::{Error, Invitation, InvitationToken};

/// Use-case port for invitation reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvitationsQuery: Send + Sync {
    /// Resolve a public token, or `not_found`.
    async fn find_invitation(&self, token: InvitationToken) -> Result<Invitation, Error>;

    /// Every invitation, newest first.
    async fn list_invitations(&self) -> Result<Vec<Invitation>, Error>;
}

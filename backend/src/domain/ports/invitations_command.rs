//! Driving port for administrative invitation changes.

use async_trait::async_trait;

use crate::domain::{Error, Invitation, InvitationToken, NewInvitation};

/// Use-case port for creating and deleting invitations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvitationsCommand: Send + Sync {
    /// Create an invitation with a fresh token and timestamp.
    async fn create_invitation(&self, request: NewInvitation) -> Result<Invitation, Error>;

    /// Delete by token, or `not_found`.
    async fn delete_invitation(&self, token: InvitationToken) -> Result<(), Error>;
}

//! Driven port for invitation persistence.

use async_trait::async_trait;

use crate::domain::{Invitation, InvitationDraft, InvitationToken};

use super::define_port_error;

define_port_error! {
    /// Errors raised by invitation repository adapters.
    pub enum InvitationRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "invitation repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "invitation repository query failed: {message}",
        /// The token collided with an existing invitation.
        DuplicateToken { token: String } =>
            "invitation token already exists: {token}",
    }
}

/// Port for invitation storage.
///
/// Tokens are unique across the store; inserting a draft whose token is
/// already taken fails with [`InvitationRepositoryError::DuplicateToken`].
///
/// `created_at` never decreases in insertion order. Inserts are serialised
/// and a draft stamped earlier than the newest stored row takes that row's
/// timestamp instead.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvitationRepository: Send + Sync {
    /// Insert an invitation and return it with its assigned id.
    async fn insert(&self, draft: &InvitationDraft) -> Result<Invitation, InvitationRepositoryError>;

    /// Look an invitation up by token.
    async fn find_by_token(
        &self,
        token: InvitationToken,
    ) -> Result<Option<Invitation>, InvitationRepositoryError>;

    /// All invitations, most recently created first.
    async fn list_newest_first(&self) -> Result<Vec<Invitation>, InvitationRepositoryError>;

    /// Delete by token, reporting whether a row was removed.
    async fn delete_by_token(&self, token: InvitationToken)
    -> Result<bool, InvitationRepositoryError>;
}

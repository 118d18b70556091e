//! Invitation domain service implementing the invitation driving ports.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{info, warn};

use crate::domain::ports::{
    InvitationRepository, InvitationRepositoryError, InvitationsCommand, InvitationsQuery,
};
use crate::domain::{Error, Invitation, InvitationDraft, InvitationToken, NewInvitation};

/// Attempts made to find an unused token before giving up.
pub const MAX_TOKEN_ATTEMPTS: usize = 3;

const INVITATION_NOT_FOUND: &str = "Invitation not found";

/// Invitation service backed by an [`InvitationRepository`].
#[derive(Clone)]
pub struct InvitationService<R> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> InvitationService<R> {
    /// Create a new service.
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// # use wedding_backend::domain::InvitationService;
    /// # use wedding_backend::outbound::memory::InMemoryInvitationRepository;
    /// let service = InvitationService::new(
    ///     Arc::new(InMemoryInvitationRepository::default()),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }
}

fn map_repository_error(error: InvitationRepositoryError) -> Error {
    match error {
        InvitationRepositoryError::Connection { .. } | InvitationRepositoryError::Query { .. } => {
            Error::internal(error.to_string())
        }
        InvitationRepositoryError::DuplicateToken { token } => {
            Error::internal(format!("invitation token collision: {token}"))
        }
    }
}

#[async_trait]
impl<R> InvitationsQuery for InvitationService<R>
where
    R: InvitationRepository,
{
    async fn find_invitation(&self, token: InvitationToken) -> Result<Invitation, Error> {
        self.repo
            .find_by_token(token)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found(INVITATION_NOT_FOUND))
    }

    async fn list_invitations(&self) -> Result<Vec<Invitation>, Error> {
        self.repo
            .list_newest_first()
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> InvitationsCommand for InvitationService<R>
where
    R: InvitationRepository,
{
    async fn create_invitation(&self, request: NewInvitation) -> Result<Invitation, Error> {
        let created_at = self.clock.utc();
        let mut last_error = None;
        for attempt in 1..=MAX_TOKEN_ATTEMPTS {
            let draft = InvitationDraft {
                uuid: InvitationToken::random(),
                guest_names: request.guest_names().to_owned(),
                is_plural: request.is_plural(),
                created_at,
            };
            match self.repo.insert(&draft).await {
                Ok(invitation) => {
                    info!(token = %invitation.uuid, "invitation created");
                    return Ok(invitation);
                }
                Err(err @ InvitationRepositoryError::DuplicateToken { .. }) => {
                    warn!(attempt, token = %draft.uuid, "invitation token collided, retrying");
                    last_error = Some(err);
                }
                Err(err) => return Err(map_repository_error(err)),
            }
        }
        Err(last_error.map_or_else(
            || Error::internal("invitation token generation failed"),
            map_repository_error,
        ))
    }

    async fn delete_invitation(&self, token: InvitationToken) -> Result<(), Error> {
        if self
            .repo
            .delete_by_token(token)
            .await
            .map_err(map_repository_error)?
        {
            info!(%token, "invitation deleted");
            Ok(())
        } else {
            Err(Error::not_found(INVITATION_NOT_FOUND))
        }
    }
}

//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data`, so they depend only
//! on domain ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{GuestsCommand, GuestsQuery, InvitationsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Guest reads.
    pub guests: Arc<dyn GuestsQuery>,
    /// Guest writes.
    pub guest_commands: Arc<dyn GuestsCommand>,
    /// Public invitation lookup.
    pub invitations: Arc<dyn InvitationsQuery>,
}

impl HttpState {
    /// Bundle the port implementations used by the handlers.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use wedding_backend::domain::{GuestService, InvitationService};
    /// use wedding_backend::inbound::http::state::HttpState;
    /// use wedding_backend::outbound::memory::{
    ///     InMemoryGuestRepository, InMemoryInvitationRepository,
    /// };
    ///
    /// let guests = Arc::new(GuestService::new(Arc::new(InMemoryGuestRepository::default())));
    /// let invitations = Arc::new(InvitationService::new(
    ///     Arc::new(InMemoryInvitationRepository::default()),
    ///     Arc::new(DefaultClock),
    /// ));
    /// let state = HttpState::new(guests.clone(), guests, invitations);
    /// # let _ = state;
    /// ```
    pub fn new(
        guests: Arc<dyn GuestsQuery>,
        guest_commands: Arc<dyn GuestsCommand>,
        invitations: Arc<dyn InvitationsQuery>,
    ) -> Self {
        Self {
            guests,
            guest_commands,
            invitations,
        }
    }
}

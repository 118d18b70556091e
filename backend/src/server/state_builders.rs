//! Builders wiring repositories into the HTTP state.

use std::sync::Arc;

use mockable::DefaultClock;

use wedding_backend::domain::ports::{GuestRepository, InvitationRepository};
use wedding_backend::domain::{GuestService, InvitationService};
use wedding_backend::inbound::http::state::HttpState;
use wedding_backend::outbound::memory::{InMemoryGuestRepository, InMemoryInvitationRepository};
use wedding_backend::outbound::persistence::{DieselGuestRepository, DieselInvitationRepository};

use super::ServerConfig;

fn services_over<G, I>(guests: G, invitations: I) -> HttpState
where
    G: GuestRepository + 'static,
    I: InvitationRepository + 'static,
{
    let guests = Arc::new(GuestService::new(Arc::new(guests)));
    let invitations = Arc::new(InvitationService::new(
        Arc::new(invitations),
        Arc::new(DefaultClock),
    ));
    HttpState::new(guests.clone(), guests, invitations)
}

/// Build handler state: Diesel adapters when a pool is configured, in-memory
/// stores otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => services_over(
            DieselGuestRepository::new(pool.clone()),
            DieselInvitationRepository::new(pool.clone()),
        ),
        None => services_over(
            InMemoryGuestRepository::default(),
            InMemoryInvitationRepository::default(),
        ),
    }
}

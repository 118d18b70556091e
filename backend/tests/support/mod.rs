//! Shared helpers for the HTTP integration suites.
//!
//! Each suite builds the application the way the server does, with the
//! in-memory adapters standing in for PostgreSQL.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use mockable::DefaultClock;

use wedding_backend::Trace;
use wedding_backend::domain::{GuestService, InvitationService};
use wedding_backend::inbound::http::error::not_found_fallback;
use wedding_backend::inbound::http::routes;
use wedding_backend::inbound::http::state::HttpState;
use wedding_backend::outbound::memory::{InMemoryGuestRepository, InMemoryInvitationRepository};

/// Services over fresh in-memory stores.
pub struct MemoryBackend {
    /// Guest use-cases, shared with the HTTP state.
    pub guests: Arc<GuestService<InMemoryGuestRepository>>,
    /// Invitation use-cases, shared with the HTTP state.
    pub invitations: Arc<InvitationService<InMemoryInvitationRepository>>,
}

impl MemoryBackend {
    /// Fresh, empty stores.
    pub fn new() -> Self {
        Self {
            guests: Arc::new(GuestService::new(Arc::new(
                InMemoryGuestRepository::default(),
            ))),
            invitations: Arc::new(InvitationService::new(
                Arc::new(InMemoryInvitationRepository::default()),
                Arc::new(DefaultClock),
            )),
        }
    }

    /// HTTP state over these services.
    pub fn http_state(&self) -> HttpState {
        HttpState::new(
            self.guests.clone(),
            self.guests.clone(),
            self.invitations.clone(),
        )
    }
}

/// Application wired as in production, minus health probes and docs.
pub fn app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(routes::configure)
        .default_service(web::to(not_found_fallback))
}

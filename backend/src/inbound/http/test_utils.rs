//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::ports::{MockGuestsCommand, MockGuestsQuery, MockInvitationsQuery};
use crate::inbound::http::error::not_found_fallback;
use crate::inbound::http::routes;
use crate::inbound::http::state::HttpState;

/// Build state from guest mocks, with an invitation port that expects no calls.
pub fn state_with(guests: MockGuestsQuery, commands: MockGuestsCommand) -> HttpState {
    HttpState::new(
        Arc::new(guests),
        Arc::new(commands),
        Arc::new(MockInvitationsQuery::new()),
    )
}

/// Build state whose only live port is the invitation lookup.
pub fn invitation_state(invitations: MockInvitationsQuery) -> HttpState {
    HttpState::new(
        Arc::new(MockGuestsQuery::new()),
        Arc::new(MockGuestsCommand::new()),
        Arc::new(invitations),
    )
}

/// Application wired the way the server wires it, minus middleware.
pub fn test_app(
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
        .configure(routes::configure)
        .default_service(web::to(not_found_fallback))
}

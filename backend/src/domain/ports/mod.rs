//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod guest_repository;
mod guests_command;
mod guests_query;
mod invitation_repository;
mod invitations_command;
mod invitations_query;

#[cfg(test)]
pub use guest_repository::MockGuestRepository;
pub use guest_repository::{GuestRepository, GuestRepositoryError};
#[cfg(test)]
pub use guests_command::MockGuestsCommand;
pub use guests_command::GuestsCommand;
#[cfg(test)]
pub use guests_query::MockGuestsQuery;
pub use guests_query::GuestsQuery;
#[cfg(test)]
pub use invitation_repository::MockInvitationRepository;
pub use invitation_repository::{InvitationRepository, InvitationRepositoryError};
#[cfg(test)]
pub use invitations_command::MockInvitationsCommand;
pub use invitations_command::InvitationsCommand;
#[cfg(test)]
pub use invitations_query::MockInvitationsQuery;
pub use invitations_query::InvitationsQuery;

//! Process-local repositories.
//!
//! Used when no database URL is configured and by the HTTP integration
//! tests. State lives behind a `Mutex`, so each call is atomic with respect
//! to every other call on the same repository.

mod guest_repository;
mod invitation_repository;

pub use guest_repository::InMemoryGuestRepository;
pub use invitation_repository::InMemoryInvitationRepository;

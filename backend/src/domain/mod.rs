//! Domain entities, validation, ports and services.
//!
//! Purpose: hold the wedding-guest rules independent of HTTP and PostgreSQL.
//! Inbound adapters call the driving ports in [`ports`]; outbound adapters
//! implement the driven ones.
//!
//! Public surface:
//! - [`Guest`], [`GuestDraft`], [`GuestPatch`] and the [`RawField`]
//!   validation input.
//! - [`Invitation`], [`InvitationToken`], [`NewInvitation`].
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failures.
//! - [`GuestService`], [`InvitationService`]: port implementations.

pub mod error;
mod guest;
mod guest_service;
mod invitation;
mod invitation_service;
pub mod ports;
mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::guest::{
    FieldError, FieldErrors, FieldProblem, Guest, GuestDraft, GuestField, GuestId, GuestName,
    GuestNameError, GuestPatch, MAX_NAME_CHARS, RawField,
};
pub use self::guest_service::GuestService;
pub use self::invitation::{
    Invitation, InvitationDraft, InvitationId, InvitationToken, InvitationValidationError,
    NewInvitation,
};
pub use self::invitation_service::{InvitationService, MAX_TOKEN_ATTEMPTS};
pub use self::trace_id::TraceId;

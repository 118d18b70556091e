//! Wedding guest backend library.
//!
//! Guests are managed over a JSON CRUD API; invitations are created
//! administratively and looked up by their public UUID.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;

//! HTTP inbound adapter exposing the guest and invitation endpoints.

pub mod error;
pub mod guests;
pub mod health;
pub mod invitations;
pub mod routes;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;

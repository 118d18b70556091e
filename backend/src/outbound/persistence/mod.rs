//! PostgreSQL persistence adapters using Diesel.
//!
//! Repositories borrow connections from a `bb8` pool through `diesel-async`
//! and translate rows to domain types. Row structs (`models`) and table
//! definitions (`schema`) stay private to this module.
//!
//! # Example
//!
//! ```ignore
//! use wedding_backend::outbound::persistence::{DbPool, DieselGuestRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/wedding")).await?;
//! let guests = DieselGuestRepository::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_guest_repository;
mod diesel_invitation_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_guest_repository::DieselGuestRepository;
pub use diesel_invitation_repository::DieselInvitationRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};

//! Outbound adapters implementing the driven ports.
//!
//! - `memory`: process-local store used without a database and in tests.
//! - `persistence`: PostgreSQL repositories built on Diesel.

pub mod memory;
pub mod persistence;

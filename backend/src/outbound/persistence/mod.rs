//! PostgreSQL persistence adapters using Diesel.
//!
//! Repositories translate between row structs and domain records and hold no
//! business logic. Row structs (`models`) and table definitions (`schema`)
//! stay private to this module. Queries run on `diesel-async` connections
//! drawn from a `bb8` pool.

mod diesel_analysis_repository;
mod diesel_membership_repository;
mod diesel_project_repository;
mod diesel_user_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_analysis_repository::DieselAnalysisRepository;
pub use diesel_membership_repository::DieselMembershipRepository;
pub use diesel_project_repository::DieselProjectRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};

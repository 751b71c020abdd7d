//! ProjectHub backend library.
//!
//! Users, projects and analyses behind a role- and ownership-aware access
//! layer. The crate follows a hexagonal layout: [`domain`] holds records,
//! policy and services; [`inbound`] adapts HTTP onto the domain's driving
//! ports; [`outbound`] implements the driven ports in memory and on
//! PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;

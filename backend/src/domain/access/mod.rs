//! Authorization policy.
//!
//! Policy functions are pure: they take the acting user, the target record and
//! any relationship facts already looked up, and answer yes or no. Services
//! perform the lookups and turn a refusal into the matching [`Error`].
//!
//! [`Error`]: crate::domain::Error

pub mod analysis_policy;
pub mod project_policy;
pub mod user_policy;
mod visibility;

pub use project_policy::ProjectRelation;
pub use visibility::ProjectVisibility;

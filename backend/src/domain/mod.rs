//! Domain entities, authorization policy, services and ports.
//!
//! Public surface:
//! - Records: [`User`], [`Project`], [`ProjectMembership`], [`Analysis`] with
//!   their validated ids and names.
//! - Policy: [`access`], pure functions over the acting user and target.
//! - Services: [`IdentityService`], [`UserService`], [`ProjectService`],
//!   [`AnalysisService`] implementing the driving ports in [`ports`].
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failure payload.

pub mod access;
pub mod analysis;
pub mod analysis_service;
pub mod error;
pub mod identity_service;
pub mod ports;
pub mod project;
pub mod project_service;
mod service_support;
#[cfg(test)]
pub(crate) mod test_fixtures;
pub mod trace_id;
pub mod user;
pub mod user_service;
mod values;

pub use self::access::user_policy::RegistrationPolicy;
pub use self::analysis::{Analysis, AnalysisChanges, AnalysisId, AnalysisName, NewAnalysis};
pub use self::analysis_service::AnalysisService;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::identity_service::IdentityService;
pub use self::project::{
    NewProject, Project, ProjectChanges, ProjectId, ProjectMembership, ProjectName,
};
pub use self::project_service::ProjectService;
pub use self::trace_id::TraceId;
pub use self::user::{NewUser, Role, UnknownRole, User, UserChanges, UserId, UserName};
pub use self::user_service::UserService;
pub use self::values::ValueValidationError;

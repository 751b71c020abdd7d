//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters. Driving
//! ports (`*Query`, `*Command`, [`IdentityResolver`]) are what inbound
//! adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod analyses_command;
mod analyses_query;
mod analysis_repository;
mod identity_resolver;
mod membership_repository;
mod project_repository;
mod projects_command;
mod projects_query;
mod user_repository;
mod users_command;
mod users_query;

#[cfg(test)]
pub use analyses_command::MockAnalysesCommand;
pub use analyses_command::AnalysesCommand;
#[cfg(test)]
pub use analyses_query::MockAnalysesQuery;
pub use analyses_query::AnalysesQuery;
#[cfg(test)]
pub use analysis_repository::MockAnalysisRepository;
pub use analysis_repository::{AnalysisRepository, AnalysisRepositoryError};
#[cfg(test)]
pub use identity_resolver::MockIdentityResolver;
pub use identity_resolver::IdentityResolver;
#[cfg(test)]
pub use membership_repository::MockMembershipRepository;
pub use membership_repository::{MembershipRepository, MembershipRepositoryError};
#[cfg(test)]
pub use project_repository::MockProjectRepository;
pub use project_repository::{ProjectRepository, ProjectRepositoryError};
#[cfg(test)]
pub use projects_command::MockProjectsCommand;
pub use projects_command::{CreateProjectRequest, ProjectsCommand, UpdateProjectRequest};
#[cfg(test)]
pub use projects_query::MockProjectsQuery;
pub use projects_query::ProjectsQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::UsersCommand;
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;

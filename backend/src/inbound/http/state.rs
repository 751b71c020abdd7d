//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see driving ports, so
//! they stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AnalysesCommand, AnalysesQuery, AnalysisRepository, IdentityResolver, MembershipRepository,
    ProjectRepository, ProjectsCommand, ProjectsQuery, UserRepository, UsersCommand, UsersQuery,
};
use crate::domain::{
    AnalysisService, IdentityService, ProjectService, RegistrationPolicy, UserService,
};

/// Parameter object bundling the driven ports a state is built from.
pub struct Repositories<U, P, M, A> {
    pub users: Arc<U>,
    pub projects: Arc<P>,
    pub memberships: Arc<M>,
    pub analyses: Arc<A>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub identity: Arc<dyn IdentityResolver>,
    pub users: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
    pub projects: Arc<dyn ProjectsQuery>,
    pub projects_command: Arc<dyn ProjectsCommand>,
    pub analyses: Arc<dyn AnalysesQuery>,
    pub analyses_command: Arc<dyn AnalysesCommand>,
}

impl HttpState {
    /// Wire the domain services over one set of repositories.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use projecthub::domain::RegistrationPolicy;
    /// use projecthub::inbound::http::state::{HttpState, Repositories};
    /// use projecthub::outbound::memory::InMemoryStore;
    ///
    /// let store = Arc::new(InMemoryStore::new(Arc::new(DefaultClock)));
    /// let state = HttpState::from_repositories(
    ///     Repositories {
    ///         users: store.clone(),
    ///         projects: store.clone(),
    ///         memberships: store.clone(),
    ///         analyses: store,
    ///     },
    ///     RegistrationPolicy::Open,
    /// );
    /// let _projects = state.projects.clone();
    /// ```
    pub fn from_repositories<U, P, M, A>(
        repositories: Repositories<U, P, M, A>,
        registration: RegistrationPolicy,
    ) -> Self
    where
        U: UserRepository + 'static,
        P: ProjectRepository + 'static,
        M: MembershipRepository + 'static,
        A: AnalysisRepository + 'static,
    {
        let Repositories {
            users,
            projects,
            memberships,
            analyses,
        } = repositories;
        let user_service = Arc::new(UserService::new(users.clone(), registration));
        let project_service = Arc::new(ProjectService::new(projects.clone(), memberships.clone()));
        let analysis_service = Arc::new(AnalysisService::new(analyses, projects, memberships));
        Self {
            identity: Arc::new(IdentityService::new(users)),
            users: user_service.clone(),
            users_command: user_service,
            projects: project_service.clone(),
            projects_command: project_service,
            analyses: analysis_service.clone(),
            analyses_command: analysis_service,
        }
    }
}

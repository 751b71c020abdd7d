//! In-memory adapter implementing every repository port.
//!
//! All four record kinds live behind one mutex, so cascades and membership
//! replacement happen in a single critical section. Used when no database is
//! configured and throughout the tests.

use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::Clock;

use crate::domain::ports::{
    AnalysisRepository, AnalysisRepositoryError, MembershipRepository, MembershipRepositoryError,
    ProjectRepository, ProjectRepositoryError, UserRepository, UserRepositoryError,
};
use crate::domain::{
    Analysis, AnalysisChanges, AnalysisId, NewAnalysis, NewProject, NewUser, Project,
    ProjectChanges, ProjectId, ProjectMembership, User, UserChanges, UserId,
};

#[derive(Debug, Default)]
struct StoreState {
    users: BTreeMap<UserId, User>,
    projects: BTreeMap<ProjectId, Project>,
    memberships: BTreeMap<(ProjectId, UserId), ProjectMembership>,
    analyses: BTreeMap<AnalysisId, Analysis>,
    last_user_id: i32,
    last_project_id: i32,
    last_analysis_id: i32,
}

impl StoreState {
    /// Swap every grant on `project` for the requested users that exist.
    fn replace_grants(
        &mut self,
        project: ProjectId,
        users: Vec<UserId>,
        now: DateTime<Utc>,
    ) -> Vec<UserId> {
        self.memberships.retain(|(granted, _), _| *granted != project);
        let mut seen = HashSet::new();
        let granted: Vec<UserId> = users
            .into_iter()
            .filter(|user| self.users.contains_key(user) && seen.insert(*user))
            .collect();
        for user in &granted {
            self.memberships.insert(
                (project, *user),
                ProjectMembership {
                    project_id: project,
                    user_id: *user,
                    created_at: now,
                },
            );
        }
        granted
    }
}

fn next_id<T>(counter: &mut i32) -> Result<T, String>
where
    T: TryFrom<i32>,
    T::Error: std::fmt::Display,
{
    *counter = counter
        .checked_add(1)
        .ok_or_else(|| "identifier space exhausted".to_owned())?;
    T::try_from(*counter).map_err(|err| err.to_string())
}

/// Process-local store for users, projects, memberships and analyses.
pub struct InMemoryStore {
    state: Mutex<StoreState>,
    clock: Arc<dyn Clock>,
}

impl InMemoryStore {
    /// Create an empty store stamping records with `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Mutex::new(StoreState::default()),
            clock,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, String> {
        self.state
            .lock()
            .map_err(|_| "in-memory store lock poisoned".to_owned())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        let state = self.lock().map_err(UserRepositoryError::query)?;
        Ok(state.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        let state = self.lock().map_err(UserRepositoryError::query)?;
        Ok(state.users.get(&id).cloned())
    }

    async fn create(&self, user: &NewUser) -> Result<User, UserRepositoryError> {
        let now = self.clock.utc();
        let mut state = self.lock().map_err(UserRepositoryError::query)?;
        let id = next_id(&mut state.last_user_id).map_err(UserRepositoryError::query)?;
        let record = User {
            id,
            name: user.name.clone(),
            role: user.role,
            created_at: now,
            updated_at: now,
        };
        state.users.insert(id, record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: UserId,
        changes: &UserChanges,
    ) -> Result<Option<User>, UserRepositoryError> {
        let now = self.clock.utc();
        let mut state = self.lock().map_err(UserRepositoryError::query)?;
        let Some(user) = state.users.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = &changes.name {
            user.name = name.clone();
        }
        if let Some(role) = changes.role {
            user.role = role;
        }
        user.updated_at = now;
        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserRepositoryError> {
        let mut state = self.lock().map_err(UserRepositoryError::query)?;
        if state.users.remove(&id).is_none() {
            return Ok(false);
        }
        state.memberships.retain(|(_, user), _| *user != id);
        for project in state.projects.values_mut() {
            if project.created_by_id == Some(id) {
                project.created_by_id = None;
            }
        }
        Ok(true)
    }
}

#[async_trait]
impl ProjectRepository for InMemoryStore {
    async fn list_all(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
        let state = self.lock().map_err(ProjectRepositoryError::query)?;
        Ok(state.projects.values().cloned().collect())
    }

    async fn list_visible_to(&self, user: UserId) -> Result<Vec<Project>, ProjectRepositoryError> {
        let state = self.lock().map_err(ProjectRepositoryError::query)?;
        Ok(state
            .projects
            .values()
            .filter(|project| {
                project.is_created_by(user) || state.memberships.contains_key(&(project.id, user))
            })
            .cloned()
            .collect())
    }

    async fn find_unscoped(
        &self,
        id: ProjectId,
    ) -> Result<Option<Project>, ProjectRepositoryError> {
        let state = self.lock().map_err(ProjectRepositoryError::query)?;
        Ok(state.projects.get(&id).cloned())
    }

    async fn create(
        &self,
        project: &NewProject,
        members: Option<Vec<UserId>>,
    ) -> Result<Project, ProjectRepositoryError> {
        let now = self.clock.utc();
        let mut state = self.lock().map_err(ProjectRepositoryError::query)?;
        if !state.users.contains_key(&project.created_by_id) {
            return Err(ProjectRepositoryError::query(format!(
                "creator {} does not exist",
                project.created_by_id
            )));
        }
        let id = next_id(&mut state.last_project_id).map_err(ProjectRepositoryError::query)?;
        let record = Project {
            id,
            name: project.name.clone(),
            created_by_id: Some(project.created_by_id),
            created_at: now,
            updated_at: now,
        };
        state.projects.insert(id, record.clone());
        if let Some(users) = members {
            state.replace_grants(id, users, now);
        }
        Ok(record)
    }

    async fn update(
        &self,
        id: ProjectId,
        changes: &ProjectChanges,
        members: Option<Vec<UserId>>,
    ) -> Result<Option<Project>, ProjectRepositoryError> {
        let now = self.clock.utc();
        let mut state = self.lock().map_err(ProjectRepositoryError::query)?;
        let Some(project) = state.projects.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(name) = &changes.name {
            project.name = name.clone();
        }
        project.updated_at = now;
        let updated = project.clone();
        if let Some(users) = members {
            state.replace_grants(id, users, now);
        }
        Ok(Some(updated))
    }

    async fn delete(&self, id: ProjectId) -> Result<bool, ProjectRepositoryError> {
        let mut state = self.lock().map_err(ProjectRepositoryError::query)?;
        if state.projects.remove(&id).is_none() {
            return Ok(false);
        }
        state.memberships.retain(|(project, _), _| *project != id);
        state.analyses.retain(|_, analysis| analysis.project_id != id);
        Ok(true)
    }
}

#[async_trait]
impl MembershipRepository for InMemoryStore {
    async fn is_member(
        &self,
        project: ProjectId,
        user: UserId,
    ) -> Result<bool, MembershipRepositoryError> {
        let state = self.lock().map_err(MembershipRepositoryError::query)?;
        Ok(state.memberships.contains_key(&(project, user)))
    }

    async fn members(&self, project: ProjectId) -> Result<Vec<UserId>, MembershipRepositoryError> {
        let state = self.lock().map_err(MembershipRepositoryError::query)?;
        Ok(state
            .memberships
            .keys()
            .filter(|(granted, _)| *granted == project)
            .map(|(_, user)| *user)
            .collect())
    }

    async fn replace(
        &self,
        project: ProjectId,
        users: Vec<UserId>,
    ) -> Result<Vec<UserId>, MembershipRepositoryError> {
        let now = self.clock.utc();
        let mut state = self.lock().map_err(MembershipRepositoryError::query)?;
        if !state.projects.contains_key(&project) {
            return Err(MembershipRepositoryError::query(format!(
                "project {project} does not exist"
            )));
        }

        let granted = state.replace_grants(project, users, now);
        Ok(granted)
    }
}

#[async_trait]
impl AnalysisRepository for InMemoryStore {
    async fn list_for_project(
        &self,
        project: ProjectId,
    ) -> Result<Vec<Analysis>, AnalysisRepositoryError> {
        let state = self.lock().map_err(AnalysisRepositoryError::query)?;
        Ok(state
            .analyses
            .values()
            .filter(|analysis| analysis.project_id == project)
            .cloned()
            .collect())
    }

    async fn find(
        &self,
        project: ProjectId,
        id: AnalysisId,
    ) -> Result<Option<Analysis>, AnalysisRepositoryError> {
        let state = self.lock().map_err(AnalysisRepositoryError::query)?;
        Ok(state
            .analyses
            .get(&id)
            .filter(|analysis| analysis.project_id == project)
            .cloned())
    }

    async fn create(&self, analysis: &NewAnalysis) -> Result<Analysis, AnalysisRepositoryError> {
        let now = self.clock.utc();
        let mut state = self.lock().map_err(AnalysisRepositoryError::query)?;
        if !state.projects.contains_key(&analysis.project_id) {
            return Err(AnalysisRepositoryError::query(format!(
                "project {} does not exist",
                analysis.project_id
            )));
        }
        let id = next_id(&mut state.last_analysis_id).map_err(AnalysisRepositoryError::query)?;
        let record = Analysis {
            id,
            name: analysis.name.clone(),
            project_id: analysis.project_id,
            created_at: now,
            updated_at: now,
        };
        state.analyses.insert(id, record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        project: ProjectId,
        id: AnalysisId,
        changes: &AnalysisChanges,
    ) -> Result<Option<Analysis>, AnalysisRepositoryError> {
        let now = self.clock.utc();
        let mut state = self.lock().map_err(AnalysisRepositoryError::query)?;
        let Some(analysis) = state
            .analyses
            .get_mut(&id)
            .filter(|analysis| analysis.project_id == project)
        else {
            return Ok(None);
        };
        if let Some(name) = &changes.name {
            analysis.name = name.clone();
        }
        analysis.updated_at = now;
        Ok(Some(analysis.clone()))
    }

    async fn delete(
        &self,
        project: ProjectId,
        id: AnalysisId,
    ) -> Result<bool, AnalysisRepositoryError> {
        let mut state = self.lock().map_err(AnalysisRepositoryError::query)?;
        let in_project = state
            .analyses
            .get(&id)
            .is_some_and(|analysis| analysis.project_id == project);
        if in_project {
            state.analyses.remove(&id);
        }
        Ok(in_project)
    }
}

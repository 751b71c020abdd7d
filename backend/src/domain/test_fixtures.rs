//! Record builders for unit tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{
    Analysis, AnalysisId, AnalysisName, Project, ProjectId, ProjectName, Role, User, UserId,
    UserName,
};

pub(crate) fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0)
        .single()
        .expect("valid fixture timestamp")
}

pub(crate) fn id<T: TryFrom<i32>>(raw: i32) -> T
where
    T::Error: std::fmt::Debug,
{
    T::try_from(raw).expect("fixture ids are positive")
}

pub(crate) fn user_with_role(raw_id: i32, role: Role) -> User {
    User {
        id: id(raw_id),
        name: UserName::new(format!("user-{raw_id}")).expect("fixture name"),
        role,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub(crate) fn project_created_by(raw_id: i32, creator: Option<i32>) -> Project {
    Project {
        id: id::<ProjectId>(raw_id),
        name: ProjectName::new(format!("project-{raw_id}")).expect("fixture name"),
        created_by_id: creator.map(id::<UserId>),
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub(crate) fn analysis_in(raw_id: i32, project: i32) -> Analysis {
    Analysis {
        id: id::<AnalysisId>(raw_id),
        name: AnalysisName::new(format!("analysis-{raw_id}")).expect("fixture name"),
        project_id: id(project),
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

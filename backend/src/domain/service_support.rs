//! Error helpers shared by the domain services.
//!
//! Store failures become internal errors at the service boundary; the HTTP
//! adapter redacts their message before it reaches a client.

use tracing::error;

use crate::domain::Error;
use crate::domain::ports::{
    AnalysisRepositoryError, MembershipRepositoryError, ProjectRepositoryError,
    UserRepositoryError,
};

pub(crate) const USER_NOT_FOUND: &str = "User not found";
pub(crate) const PROJECT_NOT_FOUND: &str = "Project not found";
pub(crate) const ANALYSIS_NOT_FOUND: &str = "Analysis not found";

pub(crate) fn user_not_found() -> Error {
    Error::not_found(USER_NOT_FOUND)
}

pub(crate) fn project_not_found() -> Error {
    Error::not_found(PROJECT_NOT_FOUND)
}

pub(crate) fn analysis_not_found() -> Error {
    Error::not_found(ANALYSIS_NOT_FOUND)
}

pub(crate) fn map_user_repository_error(err: UserRepositoryError) -> Error {
    error!(error = %err, "user repository failure");
    match err {
        UserRepositoryError::Connection { message } => {
            Error::internal(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

pub(crate) fn map_project_repository_error(err: ProjectRepositoryError) -> Error {
    error!(error = %err, "project repository failure");
    match err {
        ProjectRepositoryError::Connection { message } => {
            Error::internal(format!("project repository unavailable: {message}"))
        }
        ProjectRepositoryError::Query { message } => {
            Error::internal(format!("project repository error: {message}"))
        }
    }
}

pub(crate) fn map_membership_repository_error(err: MembershipRepositoryError) -> Error {
    error!(error = %err, "membership repository failure");
    match err {
        MembershipRepositoryError::Connection { message } => {
            Error::internal(format!("membership repository unavailable: {message}"))
        }
        MembershipRepositoryError::Query { message } => {
            Error::internal(format!("membership repository error: {message}"))
        }
    }
}

pub(crate) fn map_analysis_repository_error(err: AnalysisRepositoryError) -> Error {
    error!(error = %err, "analysis repository failure");
    match err {
        AnalysisRepositoryError::Connection { message } => {
            Error::internal(format!("analysis repository unavailable: {message}"))
        }
        AnalysisRepositoryError::Query { message } => {
            Error::internal(format!("analysis repository error: {message}"))
        }
    }
}

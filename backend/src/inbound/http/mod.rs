//! HTTP inbound adapter exposing the REST endpoints.

pub mod analyses;
pub mod dto;
pub mod error;
pub mod health;
pub mod identity;
pub mod projects;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod users;
mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Register the JSON body configuration and every REST route.
///
/// Health checks are registered separately by the server since they depend
/// on [`health::HealthState`] rather than [`state::HttpState`].
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(users::list_users)
        .service(users::get_user)
        .service(users::create_user)
        .service(users::update_user)
        .service(users::delete_user)
        .service(projects::list_projects)
        .service(projects::get_project)
        .service(projects::create_project)
        .service(projects::update_project)
        .service(projects::delete_project)
        .service(analyses::list_analyses)
        .service(analyses::get_analysis)
        .service(analyses::create_analysis)
        .service(analyses::update_analysis)
        .service(analyses::delete_analysis);
}

//! Builds [`HttpState`] over either the Diesel or the in-memory adapters.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::info;

use projecthub::inbound::http::state::{HttpState, Repositories};
use projecthub::outbound::memory::InMemoryStore;
use projecthub::outbound::persistence::{
    DieselAnalysisRepository, DieselMembershipRepository, DieselProjectRepository,
    DieselUserRepository,
};

use super::ServerConfig;

pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = match &config.db_pool {
        Some(pool) => {
            info!("serving from PostgreSQL");
            HttpState::from_repositories(
                Repositories {
                    users: Arc::new(DieselUserRepository::new(pool.clone())),
                    projects: Arc::new(DieselProjectRepository::new(pool.clone())),
                    memberships: Arc::new(DieselMembershipRepository::new(pool.clone())),
                    analyses: Arc::new(DieselAnalysisRepository::new(pool.clone())),
                },
                config.registration,
            )
        }
        None => {
            info!("no database configured; serving from the in-memory store");
            let store = Arc::new(InMemoryStore::new(Arc::new(DefaultClock)));
            HttpState::from_repositories(
                Repositories {
                    users: store.clone(),
                    projects: store.clone(),
                    memberships: store.clone(),
                    analyses: store,
                },
                config.registration,
            )
        }
    };
    web::Data::new(state)
}

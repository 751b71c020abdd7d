//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::{App, test::TestRequest, web};
use mockable::DefaultClock;

use super::identity::USER_ID_HEADER;
use super::state::{HttpState, Repositories};
use crate::domain::ports::UserRepository;
use crate::domain::{NewUser, RegistrationPolicy, Role, User, UserName};
use crate::outbound::memory::InMemoryStore;

/// In-memory store seeded with one user per role.
pub(crate) struct SeededStore {
    pub store: Arc<InMemoryStore>,
    pub admin: User,
    pub manager: User,
    pub reader: User,
}

impl SeededStore {
    pub fn state(&self, registration: RegistrationPolicy) -> web::Data<HttpState> {
        web::Data::new(HttpState::from_repositories(
            Repositories {
                users: self.store.clone(),
                projects: self.store.clone(),
                memberships: self.store.clone(),
                analyses: self.store.clone(),
            },
            registration,
        ))
    }

    /// App serving every route over this store.
    pub fn app(
        &self,
        registration: RegistrationPolicy,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        App::new()
            .app_data(self.state(registration))
            .configure(super::configure)
    }
}

async fn add_user(store: &InMemoryStore, name: &str, role: Role) -> User {
    UserRepository::create(
        store,
        &NewUser {
            name: UserName::new(name).expect("valid name"),
            role,
        },
    )
    .await
    .expect("seed user")
}

/// Store holding admin "Ada", manager "Max" and reader "Rita".
pub(crate) async fn seeded_store() -> SeededStore {
    let store = Arc::new(InMemoryStore::new(Arc::new(DefaultClock)));
    let admin = add_user(&store, "Ada", Role::Admin).await;
    let manager = add_user(&store, "Max", Role::Manager).await;
    let reader = add_user(&store, "Rita", Role::Reader).await;
    SeededStore {
        store,
        admin,
        manager,
        reader,
    }
}

/// Attach `user` as the acting identity.
pub(crate) fn acting_as(req: TestRequest, user: &User) -> TestRequest {
    req.insert_header((USER_ID_HEADER, user.id.to_string()))
}

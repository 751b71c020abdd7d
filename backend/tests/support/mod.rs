//! Shared helpers for backend integration tests.
//!
//! Each test builds its own in-memory store and app, so tests never observe
//! each other's records.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};
use mockable::DefaultClock;
use projecthub::domain::ports::UserRepository;
use projecthub::domain::{NewUser, RegistrationPolicy, Role, User, UserName};
use projecthub::inbound::http::configure;
use projecthub::inbound::http::identity::USER_ID_HEADER;
use projecthub::inbound::http::state::{HttpState, Repositories};
use projecthub::middleware::Trace;
use projecthub::outbound::memory::InMemoryStore;
use serde_json::Value;

/// Users seeded into every scenario.
pub struct Cast {
    pub admin: User,
    pub manager: User,
    pub reader: User,
}

pub async fn seed_user(store: &InMemoryStore, name: &str, role: Role) -> User {
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

/// Store with an admin, a manager and a reader.
pub async fn seeded_store() -> (Arc<InMemoryStore>, Cast) {
    let store = Arc::new(InMemoryStore::new(Arc::new(DefaultClock)));
    let cast = Cast {
        admin: seed_user(&store, "Ada", Role::Admin).await,
        manager: seed_user(&store, "Max", Role::Manager).await,
        reader: seed_user(&store, "Rita", Role::Reader).await,
    };
    (store, cast)
}

/// Initialise the full REST surface over `store`.
pub async fn init_app(
    store: Arc<InMemoryStore>,
    registration: RegistrationPolicy,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    let state = HttpState::from_repositories(
        Repositories {
            users: store.clone(),
            projects: store.clone(),
            memberships: store.clone(),
            analyses: store,
        },
        registration,
    );
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .configure(configure),
    )
    .await
}

/// Issue a request as `actor` (or anonymously) and decode the JSON body.
pub async fn send(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>,
    request: test::TestRequest,
    actor: Option<&User>,
) -> (u16, Value) {
    let request = match actor {
        Some(user) => request.insert_header((USER_ID_HEADER, user.id.to_string())),
        None => request,
    };
    let response = test::call_service(app, request.to_request()).await;
    let status = response.status().as_u16();
    let body = test::read_body(response).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("JSON response body")
    };
    (status, value)
}

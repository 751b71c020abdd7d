//! Acting-user extraction from the `X-User-ID` header.
//!
//! The header is trusted as-is; resolving it through
//! [`crate::domain::ports::IdentityResolver`] only proves that the user
//! exists. A missing or blank header means no identity was supplied, while a
//! malformed or unknown id is an identity that failed to resolve.

use std::sync::Arc;

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use super::state::HttpState;
use crate::domain::ports::IdentityResolver;
use crate::domain::{Error, User, UserId};

/// Request header naming the acting user.
pub const USER_ID_HEADER: &str = "X-User-ID";

const MISSING_IDENTITY: &str = "User ID not provided";
const UNKNOWN_IDENTITY: &str = "User not found";

/// Acting user for handlers that require one.
#[derive(Debug, Clone)]
pub struct ActingUser(pub User);

/// Acting user for handlers where an identity is optional.
///
/// A present but unresolvable header is still rejected.
#[derive(Debug, Clone)]
pub struct OptionalActingUser(pub Option<User>);

fn header_value(req: &HttpRequest) -> Option<String> {
    let raw = req.headers().get(USER_ID_HEADER)?;
    let text = String::from_utf8_lossy(raw.as_bytes());
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn resolver(req: &HttpRequest) -> Result<Arc<dyn IdentityResolver>, Error> {
    req.app_data::<web::Data<HttpState>>()
        .map(|state| state.identity.clone())
        .ok_or_else(|| Error::internal("HTTP state is not configured"))
}

async fn resolve(identity: Arc<dyn IdentityResolver>, raw: &str) -> Result<User, Error> {
    let id: UserId = raw.parse().map_err(|_| {
        warn!(header = raw, "rejected malformed acting user id");
        Error::unauthorized(UNKNOWN_IDENTITY)
    })?;
    identity.resolve(id).await
}

impl FromRequest for ActingUser {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let header = header_value(req);
        let identity = resolver(req);
        Box::pin(async move {
            let raw = header.ok_or_else(|| Error::unauthorized(MISSING_IDENTITY))?;
            resolve(identity?, &raw).await.map(Self)
        })
    }
}

impl FromRequest for OptionalActingUser {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let header = header_value(req);
        let identity = resolver(req);
        Box::pin(async move {
            match header {
                Some(raw) => resolve(identity?, &raw).await.map(|user| Self(Some(user))),
                None => Ok(Self(None)),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test};
    use rstest::rstest;
    use serde_json::Value;

    use super::*;
    use crate::domain::{RegistrationPolicy, Role};
    use crate::inbound::http::test_utils::{SeededStore, seeded_store};

    async fn whoami(user: ActingUser) -> HttpResponse {
        HttpResponse::Ok().body(user.0.name.to_string())
    }

    async fn maybe(user: OptionalActingUser) -> HttpResponse {
        let body = user.0.map_or_else(|| "anonymous".to_owned(), |u| u.role.to_string());
        HttpResponse::Ok().body(body)
    }

    async fn call(seeded: &SeededStore, path: &str, header: Option<&str>) -> (StatusCode, String) {
        let app = test::init_service(
            App::new()
                .app_data(seeded.state(RegistrationPolicy::Open))
                .route("/whoami", web::get().to(whoami))
                .route("/maybe", web::get().to(maybe)),
        )
        .await;
        let mut req = test::TestRequest::get().uri(path);
        if let Some(value) = header {
            req = req.insert_header((USER_ID_HEADER, value));
        }
        let res = test::call_service(&app, req.to_request()).await;
        let status = res.status();
        let body = test::read_body(res).await;
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    fn message(body: &str) -> String {
        let value: Value = serde_json::from_str(body).expect("json error body");
        value["message"].as_str().unwrap_or_default().to_owned()
    }

    #[rstest]
    #[actix_web::test]
    async fn resolves_known_user() {
        let seeded = seeded_store().await;
        let header = seeded.manager.id.to_string();
        let (status, body) = call(&seeded, "/whoami", Some(&header)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Max");
    }

    #[rstest]
    #[case(None)]
    #[case(Some("   "))]
    #[actix_web::test]
    async fn missing_header_is_unauthorised(#[case] header: Option<&str>) {
        let seeded = seeded_store().await;
        let (status, body) = call(&seeded, "/whoami", header).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(message(&body), "User ID not provided");
    }

    #[rstest]
    #[case("abc")]
    #[case("-1")]
    #[case("404")]
    #[actix_web::test]
    async fn unresolvable_header_is_unauthorised(#[case] header: &str) {
        let seeded = seeded_store().await;
        let (status, body) = call(&seeded, "/whoami", Some(header)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(message(&body), "User not found");
    }

    #[rstest]
    #[actix_web::test]
    async fn optional_identity_tolerates_absence_only() {
        let seeded = seeded_store().await;
        let (status, body) = call(&seeded, "/maybe", None).await;
        assert_eq!((status, body.as_str()), (StatusCode::OK, "anonymous"));

        let header = seeded.reader.id.to_string();
        let (_, body) = call(&seeded, "/maybe", Some(&header)).await;
        assert_eq!(body, Role::Reader.as_str());

        let (status, _) = call(&seeded, "/maybe", Some("999")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}

//! HTTP tests for the analyses endpoints.

use actix_web::http::StatusCode;
use actix_web::test;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::{RegistrationPolicy, User};
use crate::inbound::http::dto::ProjectResponse;
use crate::inbound::http::test_utils::{acting_as, seeded_store};

async fn create_project(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    owner: &User,
    body: Value,
) -> ProjectResponse {
    let req = acting_as(test::TestRequest::post().uri("/projects"), owner)
        .set_json(body)
        .to_request();
    test::call_and_read_body_json(app, req).await
}

#[rstest]
#[actix_web::test]
async fn reader_sees_empty_list_for_inaccessible_project() {
    let seeded = seeded_store().await;
    let app = test::init_service(seeded.app(RegistrationPolicy::Open)).await;
    let alpha = create_project(&app, &seeded.admin, json!({"name": "Alpha"})).await;
    let uri = format!("/projects/{}/analyses", alpha.id);
    let add = acting_as(test::TestRequest::post().uri(&uri), &seeded.admin)
        .set_json(json!({"name": "A1"}))
        .to_request();
    assert_eq!(test::call_service(&app, add).await.status(), StatusCode::CREATED);

    let req = acting_as(test::TestRequest::get().uri(&uri), &seeded.reader).to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let listed: Vec<AnalysisResponse> = test::read_body_json(res).await;
    assert!(listed.is_empty());
}

#[rstest]
#[actix_web::test]
async fn owner_manager_creates_and_renames_analysis() {
    let seeded = seeded_store().await;
    let app = test::init_service(seeded.app(RegistrationPolicy::Open)).await;
    let beta = create_project(&app, &seeded.manager, json!({"name": "Beta"})).await;

    let create = acting_as(
        test::TestRequest::post().uri(&format!("/projects/{}/analyses", beta.id)),
        &seeded.manager,
    )
    .set_json(json!({"name": "A1", "data": {"rows": 3}}))
    .to_request();
    let res = test::call_service(&app, create).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let a1: AnalysisResponse = test::read_body_json(res).await;
    assert_eq!(a1.project_id, beta.id);

    let rename = acting_as(
        test::TestRequest::put().uri(&format!("/projects/{}/analyses/{}", beta.id, a1.id)),
        &seeded.manager,
    )
    .set_json(json!({"name": "A1 revised"}))
    .to_request();
    let renamed: AnalysisResponse = test::call_and_read_body_json(&app, rename).await;
    assert_eq!(renamed.name, "A1 revised");
}

#[rstest]
#[actix_web::test]
async fn member_reader_reads_but_cannot_write() {
    let seeded = seeded_store().await;
    let app = test::init_service(seeded.app(RegistrationPolicy::Open)).await;
    let alpha = create_project(
        &app,
        &seeded.admin,
        json!({"name": "Alpha", "userIds": [seeded.reader.id.get()]}),
    )
    .await;
    let base = format!("/projects/{}/analyses", alpha.id);
    let add = acting_as(test::TestRequest::post().uri(&base), &seeded.admin)
        .set_json(json!({"name": "A1"}))
        .to_request();
    let a1: AnalysisResponse = test::call_and_read_body_json(&app, add).await;

    let read = acting_as(
        test::TestRequest::get().uri(&format!("{base}/{}", a1.id)),
        &seeded.reader,
    )
    .to_request();
    assert_eq!(test::call_service(&app, read).await.status(), StatusCode::OK);

    let create = acting_as(test::TestRequest::post().uri(&base), &seeded.reader)
        .set_json(json!({"name": "A2"}))
        .to_request();
    assert_eq!(
        test::call_service(&app, create).await.status(),
        StatusCode::FORBIDDEN
    );

    let delete = acting_as(
        test::TestRequest::delete().uri(&format!("{base}/{}", a1.id)),
        &seeded.reader,
    )
    .to_request();
    assert_eq!(
        test::call_service(&app, delete).await.status(),
        StatusCode::FORBIDDEN
    );
}

#[rstest]
#[actix_web::test]
async fn missing_analysis_in_visible_project_is_404() {
    let seeded = seeded_store().await;
    let app = test::init_service(seeded.app(RegistrationPolicy::Open)).await;
    let alpha = create_project(&app, &seeded.admin, json!({"name": "Alpha"})).await;

    let req = acting_as(
        test::TestRequest::get().uri(&format!("/projects/{}/analyses/77", alpha.id)),
        &seeded.admin,
    )
    .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "Analysis not found");
}

#[rstest]
#[actix_web::test]
async fn invalid_analysis_id_names_the_field() {
    let seeded = seeded_store().await;
    let app = test::init_service(seeded.app(RegistrationPolicy::Open)).await;

    let req = acting_as(
        test::TestRequest::delete().uri("/projects/1/analyses/abc"),
        &seeded.admin,
    )
    .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["details"]["field"], "analysisId");
}

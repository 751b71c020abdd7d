//! HTTP tests for the projects endpoints.

use actix_web::http::StatusCode;
use actix_web::test;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::RegistrationPolicy;
use crate::inbound::http::test_utils::{acting_as, seeded_store};

#[rstest]
#[actix_web::test]
async fn creator_and_members_see_a_project_others_get_404() {
    let seeded = seeded_store().await;
    let app = test::init_service(seeded.app(RegistrationPolicy::Open)).await;

    let create = acting_as(test::TestRequest::post().uri("/projects"), &seeded.admin)
        .set_json(json!({"name": "Alpha"}))
        .to_request();
    let res = test::call_service(&app, create).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let alpha: ProjectResponse = test::read_body_json(res).await;
    assert_eq!(alpha.created_by_id, Some(seeded.admin.id.get()));
    let uri = format!("/projects/{}", alpha.id);

    let hidden = acting_as(test::TestRequest::get().uri(&uri), &seeded.reader).to_request();
    let res = test::call_service(&app, hidden).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "Project not found");

    let grant = acting_as(test::TestRequest::put().uri(&uri), &seeded.admin)
        .set_json(json!({"userIds": [seeded.reader.id.get(), 999]}))
        .to_request();
    assert_eq!(test::call_service(&app, grant).await.status(), StatusCode::OK);

    let visible = acting_as(test::TestRequest::get().uri(&uri), &seeded.reader).to_request();
    let project: ProjectResponse = test::call_and_read_body_json(&app, visible).await;
    assert_eq!(project.name, "Alpha");
}

#[rstest]
#[actix_web::test]
async fn member_manager_cannot_rename_foreign_project() {
    let seeded = seeded_store().await;
    let app = test::init_service(seeded.app(RegistrationPolicy::Open)).await;

    let create = acting_as(test::TestRequest::post().uri("/projects"), &seeded.admin)
        .set_json(json!({"name": "Alpha", "userIds": [seeded.manager.id.get()]}))
        .to_request();
    let alpha: ProjectResponse = test::call_and_read_body_json(&app, create).await;

    let rename = acting_as(
        test::TestRequest::put().uri(&format!("/projects/{}", alpha.id)),
        &seeded.manager,
    )
    .set_json(json!({"name": "Mine now"}))
    .to_request();
    assert_eq!(
        test::call_service(&app, rename).await.status(),
        StatusCode::FORBIDDEN
    );
}

#[rstest]
#[actix_web::test]
async fn reader_cannot_create_projects() {
    let seeded = seeded_store().await;
    let app = test::init_service(seeded.app(RegistrationPolicy::Open)).await;

    let req = acting_as(test::TestRequest::post().uri("/projects"), &seeded.reader)
        .set_json(json!({"name": "Gamma"}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::FORBIDDEN
    );
}

#[rstest]
#[actix_web::test]
async fn listing_is_scoped_by_role() {
    let seeded = seeded_store().await;
    let app = test::init_service(seeded.app(RegistrationPolicy::Open)).await;
    for (owner, name) in [(&seeded.admin, "Alpha"), (&seeded.manager, "Beta")] {
        let req = acting_as(test::TestRequest::post().uri("/projects"), owner)
            .set_json(json!({"name": name}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    let as_admin = acting_as(test::TestRequest::get().uri("/projects"), &seeded.admin).to_request();
    let all: Vec<ProjectResponse> = test::call_and_read_body_json(&app, as_admin).await;
    assert_eq!(all.len(), 2);

    let as_manager =
        acting_as(test::TestRequest::get().uri("/projects"), &seeded.manager).to_request();
    let mine: Vec<ProjectResponse> = test::call_and_read_body_json(&app, as_manager).await;
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].name, "Beta");
}

#[rstest]
#[actix_web::test]
async fn owner_deletes_project() {
    let seeded = seeded_store().await;
    let app = test::init_service(seeded.app(RegistrationPolicy::Open)).await;
    let create = acting_as(test::TestRequest::post().uri("/projects"), &seeded.manager)
        .set_json(json!({"name": "Beta"}))
        .to_request();
    let beta: ProjectResponse = test::call_and_read_body_json(&app, create).await;
    let uri = format!("/projects/{}", beta.id);

    let delete = acting_as(test::TestRequest::delete().uri(&uri), &seeded.manager).to_request();
    let message: MessageResponse = test::call_and_read_body_json(&app, delete).await;
    assert_eq!(message.message, "Project deleted");

    let again = acting_as(test::TestRequest::delete().uri(&uri), &seeded.manager).to_request();
    assert_eq!(
        test::call_service(&app, again).await.status(),
        StatusCode::NOT_FOUND
    );
}

#[rstest]
#[actix_web::test]
async fn malformed_json_is_reported_as_json() {
    let seeded = seeded_store().await;
    let app = test::init_service(seeded.app(RegistrationPolicy::Open)).await;

    let req = acting_as(test::TestRequest::post().uri("/projects"), &seeded.admin)
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
}

#[rstest]
#[case("/projects/0")]
#[case("/projects/x1")]
#[actix_web::test]
async fn invalid_project_ids_are_bad_requests(#[case] uri: &str) {
    let seeded = seeded_store().await;
    let app = test::init_service(seeded.app(RegistrationPolicy::Open)).await;

    let req = acting_as(test::TestRequest::get().uri(uri), &seeded.admin).to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );
}

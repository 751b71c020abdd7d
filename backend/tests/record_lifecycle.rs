//! Deletion and membership side effects observed through the REST surface.

mod support;

use actix_web::test::TestRequest;
use projecthub::domain::ports::{MembershipRepository, ProjectRepository};
use projecthub::domain::{ProjectId, RegistrationPolicy, Role};
use rstest::rstest;
use serde_json::json;

use support::{init_app, seed_user, seeded_store, send};

fn project_id(body: &serde_json::Value) -> ProjectId {
    let raw = body["id"].as_i64().expect("numeric id");
    ProjectId::try_from(i32::try_from(raw).expect("id fits i32")).expect("positive id")
}

#[rstest]
#[actix_web::test]
async fn deleting_creator_orphans_project() {
    let (store, cast) = seeded_store().await;
    let app = init_app(store.clone(), RegistrationPolicy::Open).await;
    let (_, beta) = send(
        &app,
        TestRequest::post().uri("/projects").set_json(json!({"name": "Beta"})),
        Some(&cast.manager),
    )
    .await;

    let (status, body) = send(
        &app,
        TestRequest::delete().uri(&format!("/users/{}", cast.manager.id)),
        Some(&cast.admin),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "User deleted");

    let (status, project) = send(
        &app,
        TestRequest::get().uri(&format!("/projects/{}", beta["id"])),
        Some(&cast.admin),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(project["createdById"], serde_json::Value::Null);
    assert!(
        ProjectRepository::find_unscoped(store.as_ref(), project_id(&beta))
            .await
            .expect("lookup")
            .is_some()
    );
}

#[rstest]
#[actix_web::test]
async fn member_replacement_ignores_unknown_users() {
    let (store, cast) = seeded_store().await;
    let first = seed_user(&store, "Alice", Role::Reader).await;
    let second = seed_user(&store, "Bob", Role::Reader).await;
    let app = init_app(store.clone(), RegistrationPolicy::Open).await;
    let (_, alpha) = send(
        &app,
        TestRequest::post()
            .uri("/projects")
            .set_json(json!({"name": "Alpha", "userIds": [cast.reader.id.get()]})),
        Some(&cast.admin),
    )
    .await;

    let (status, _) = send(
        &app,
        TestRequest::put()
            .uri(&format!("/projects/{}", alpha["id"]))
            .set_json(json!({"userIds": [first.id.get(), second.id.get(), 9_999]})),
        Some(&cast.admin),
    )
    .await;
    assert_eq!(status, 200);

    let members = store
        .members(project_id(&alpha))
        .await
        .expect("members");
    assert_eq!(members, vec![first.id, second.id]);

    let (status, _) = send(
        &app,
        TestRequest::get().uri(&format!("/projects/{}", alpha["id"])),
        Some(&cast.reader),
    )
    .await;
    assert_eq!(status, 404);
}

#[rstest]
#[case(json!(0))]
#[case(json!(-4))]
#[case(json!(3_000_000_000_i64))]
#[actix_web::test]
async fn member_replacement_skips_ids_no_user_can_hold(#[case] unresolvable: serde_json::Value) {
    let (store, cast) = seeded_store().await;
    let app = init_app(store.clone(), RegistrationPolicy::Open).await;
    let (_, alpha) = send(
        &app,
        TestRequest::post().uri("/projects").set_json(json!({"name": "Alpha"})),
        Some(&cast.admin),
    )
    .await;

    let (status, body) = send(
        &app,
        TestRequest::put()
            .uri(&format!("/projects/{}", alpha["id"]))
            .set_json(json!({
                "userIds": [cast.manager.id.get(), cast.reader.id.get(), unresolvable]
            })),
        Some(&cast.admin),
    )
    .await;
    assert_eq!(status, 200, "{body}");

    let members = store
        .members(project_id(&alpha))
        .await
        .expect("members");
    assert_eq!(members, vec![cast.manager.id, cast.reader.id]);
}

#[rstest]
#[actix_web::test]
async fn non_integer_member_ids_are_bad_requests() {
    let (store, cast) = seeded_store().await;
    let app = init_app(store, RegistrationPolicy::Open).await;

    let (status, body) = send(
        &app,
        TestRequest::post()
            .uri("/projects")
            .set_json(json!({"name": "Alpha", "userIds": ["two"]})),
        Some(&cast.admin),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["code"], "invalid_request");
}

#[rstest]
#[actix_web::test]
async fn deleting_project_removes_its_analyses_and_grants() {
    let (store, cast) = seeded_store().await;
    let app = init_app(store.clone(), RegistrationPolicy::Open).await;
    let (_, alpha) = send(
        &app,
        TestRequest::post()
            .uri("/projects")
            .set_json(json!({"name": "Alpha", "userIds": [cast.reader.id.get()]})),
        Some(&cast.admin),
    )
    .await;
    let analyses = format!("/projects/{}/analyses", alpha["id"]);
    let (status, _) = send(
        &app,
        TestRequest::post().uri(&analyses).set_json(json!({"name": "A1"})),
        Some(&cast.admin),
    )
    .await;
    assert_eq!(status, 201);

    let (status, body) = send(
        &app,
        TestRequest::delete().uri(&format!("/projects/{}", alpha["id"])),
        Some(&cast.admin),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body["message"], "Project deleted");

    let (status, listed) = send(&app, TestRequest::get().uri(&analyses), Some(&cast.admin)).await;
    assert_eq!(status, 200);
    assert_eq!(listed, json!([]));
    assert!(
        !store
            .is_member(project_id(&alpha), cast.reader.id)
            .await
            .expect("lookup")
    );
}

#[rstest]
#[actix_web::test]
async fn registration_is_open_by_default_and_restricted_on_request() {
    let (store, cast) = seeded_store().await;
    let open = init_app(store.clone(), RegistrationPolicy::Open).await;
    let (status, created) = send(
        &open,
        TestRequest::post().uri("/users").set_json(json!({"name": "Grace"})),
        None,
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(created["role"], "reader");

    let restricted = init_app(store, RegistrationPolicy::Restricted).await;
    let (status, _) = send(
        &restricted,
        TestRequest::post().uri("/users").set_json(json!({"name": "Hopper"})),
        None,
    )
    .await;
    assert_eq!(status, 401);
    let (status, created) = send(
        &restricted,
        TestRequest::post()
            .uri("/users")
            .set_json(json!({"name": "Hopper", "role": "manager"})),
        Some(&cast.manager),
    )
    .await;
    assert_eq!(status, 201);
    assert_eq!(created["role"], "manager");
}

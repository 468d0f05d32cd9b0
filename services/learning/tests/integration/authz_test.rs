use axum_test::TestServer;
use http::{HeaderName, HeaderValue};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use uuid::Uuid;

use emmaus_domain::role::Role;
use emmaus_learning::infra::auth::HttpAuthProvider;
use emmaus_learning::router::build_router;
use emmaus_learning::state::AppState;
use emmaus_testing::auth::MockAuth;

/// Identity and allow-list checks run before any store access, so a
/// disconnected database is enough to exercise the 401/403 paths.
fn server() -> TestServer {
    let state = AppState::new(
        DatabaseConnection::Disconnected,
        HttpAuthProvider::new("http://auth.invalid".to_owned()),
    );
    TestServer::new(build_router(state)).unwrap()
}

fn with_auth(request: axum_test::TestRequest, auth: &MockAuth) -> axum_test::TestRequest {
    let mut request = request;
    for (name, value) in auth.headers().iter() {
        request = request.add_header(name.clone(), value.clone());
    }
    request
}

#[tokio::test]
async fn missing_identity_headers_yield_401() {
    let server = server();

    let response = server
        .post("/dioceses")
        .json(&json!({ "name": "Diocese of Pergamon" }))
        .await;

    assert_eq!(response.status_code(), 401);
    let body: Value = response.json();
    assert_eq!(body["kind"], "AUTHENTICATION_REQUIRED");
}

#[tokio::test]
async fn plain_user_cannot_create_dioceses() {
    let server = server();
    let auth = MockAuth::with_role(Role::User);

    let response = with_auth(server.post("/dioceses"), &auth)
        .json(&json!({ "name": "Diocese of Pergamon" }))
        .await;

    assert_eq!(response.status_code(), 403);
    let body: Value = response.json();
    assert_eq!(body["kind"], "INSUFFICIENT_PRIVILEGE");
}

#[tokio::test]
async fn regional_admin_is_not_on_the_diocese_allow_list() {
    let server = server();
    let auth = MockAuth::with_role(Role::RegionalAdmin);

    let response = with_auth(server.post("/dioceses"), &auth)
        .json(&json!({ "name": "Diocese of Pergamon" }))
        .await;

    assert_eq!(response.status_code(), 403);
}

#[tokio::test]
async fn unknown_role_value_is_treated_as_no_privilege() {
    let server = server();

    let response = server
        .post("/dioceses")
        .add_header(
            HeaderName::from_static("x-emmaus-user-id"),
            HeaderValue::from_str(&Uuid::now_v7().to_string()).unwrap(),
        )
        .add_header(
            HeaderName::from_static("x-emmaus-user-role"),
            HeaderValue::from_static("9"),
        )
        .json(&json!({ "name": "Diocese of Pergamon" }))
        .await;

    assert_eq!(response.status_code(), 403);
}

#[tokio::test]
async fn authorized_admin_reaches_body_validation() {
    let server = server();
    let auth = MockAuth::with_role(Role::RootAdmin);

    // Blank name fails validation, which proves the request got past the
    // allow-list gate without touching the store.
    let response = with_auth(server.post("/dioceses"), &auth)
        .json(&json!({ "name": "   " }))
        .await;

    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert_eq!(body["kind"], "MISSING_DATA");
}

#[tokio::test]
async fn manager_replace_rejects_unknown_entity_kind() {
    let server = server();
    let auth = MockAuth::with_role(Role::RootAdmin);

    let response = with_auth(server.patch("/managers"), &auth)
        .json(&json!({
            "kind": "parish",
            "entity_id": Uuid::now_v7(),
            "manager_ids": [],
        }))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn user_cannot_read_another_users_progress() {
    let server = server();
    let auth = MockAuth::with_role(Role::User);
    let other = Uuid::now_v7();

    let response = with_auth(server.get(&format!("/users/{other}/progress")), &auth).await;

    assert_eq!(response.status_code(), 403);
}

#[tokio::test]
async fn self_read_passes_the_progress_gate() {
    let server = server();
    let auth = MockAuth::with_role(Role::User);

    // Reading one's own progress passes the gate; the disconnected store then
    // surfaces as an internal error rather than a 403.
    let response = with_auth(
        server.get(&format!("/users/{}/progress", auth.user_id)),
        &auth,
    )
    .await;

    assert_eq!(response.status_code(), 500);
}

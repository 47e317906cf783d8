use super::helpers::{assert_status, basic, get, put_json, read_json, send, spawn_app};
use axum::http::{StatusCode, header};
use serde_json::{Value, json};

fn update_body() -> Value {
    json!({ "name": "Edited", "photo": "https://photos.example.com/edited.jpg" })
}

#[tokio::test]
async fn anonymous_update_is_401_with_basic_challenge() {
    let app = spawn_app().await;

    let res = send(&app.app, put_json("/cities/1", None, update_body())).await;
    assert_status(res.status(), StatusCode::UNAUTHORIZED);
    let challenge = res
        .headers()
        .get(header::WWW_AUTHENTICATE)
        .and_then(|v| v.to_str().ok())
        .expect("missing WWW-Authenticate");
    assert!(challenge.starts_with("Basic"));

    let stored = app.repo.get(1).await.expect("city 1 exists");
    assert_eq!(stored.name, "Tokyo");
}

#[tokio::test]
async fn anonymous_update_of_invalid_id_is_401() {
    let app = spawn_app().await;

    let res = send(&app.app, put_json("/cities/0", None, update_body())).await;
    assert_status(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn reader_update_is_403() {
    let app = spawn_app().await;
    let auth = basic("user", "pass");

    let res = send(&app.app, put_json("/cities/1", Some(&auth), update_body())).await;
    assert_status(res.status(), StatusCode::FORBIDDEN);
    let body: Value = read_json(res).await;
    assert_eq!(body["error"], "Access denied");
}

#[tokio::test]
async fn wrong_password_is_401_even_on_reads() {
    let app = spawn_app().await;
    let auth = basic("admin", "nope");

    let res = send(&app.app, put_json("/cities/1", Some(&auth), update_body())).await;
    assert_status(res.status(), StatusCode::UNAUTHORIZED);

    let req = axum::http::Request::builder()
        .method("GET")
        .uri("/cities/Tokyo")
        .header(header::AUTHORIZATION, basic("ghost", "pass"))
        .body(axum::body::Body::empty())
        .expect("failed to build request");
    let res = send(&app.app, req).await;
    assert_status(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn reads_are_open_to_anonymous_and_authenticated_users() {
    let app = spawn_app().await;

    let res = send(&app.app, get("/cities?pageNumber=0&pageSize=5")).await;
    assert_status(res.status(), StatusCode::OK);

    let req = axum::http::Request::builder()
        .method("GET")
        .uri("/cities/Seoul")
        .header(header::AUTHORIZATION, basic("user", "pass"))
        .body(axum::body::Body::empty())
        .expect("failed to build request");
    let res = send(&app.app, req).await;
    assert_status(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn bearer_token_is_treated_as_anonymous() {
    let app = spawn_app().await;

    let res = send(
        &app.app,
        put_json("/cities/1", Some("Bearer not-a-basic-token"), update_body()),
    )
    .await;
    assert_status(res.status(), StatusCode::UNAUTHORIZED);
}

//! Sign in with a CLI-issued link and edit a note over HTTP.

mod common;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use common::harness::{TestEnv, TestNote};
use jotter::render::Templates;
use jotter::web::{AppState, router};
use predicates::prelude::*;
use tower::ServiceExt;

fn app(env: &TestEnv) -> Router {
    let state = AppState::new(env.store(), Templates::new().unwrap());
    router(state)
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn login_link_then_edit_round_trip() {
    let env = TestEnv::new();
    let user = env.add_user("ann@example.com");
    let id = env.add_note(&user, &TestNote::new("Shopping").body("Milk"));
    let page = format!("/notes/{}/edit", id);

    let link = env
        .cmd()
        .session(user.as_str())
        .args(["--redirect-to", &page])
        .output_success();
    let path_and_query = link
        .trim()
        .strip_prefix("http://127.0.0.1:3000")
        .unwrap()
        .to_string();

    let app = app(&env);

    // Following the link sets the cookie and bounces to the edit page.
    let response = send(
        &app,
        Request::get(path_and_query.as_str()).body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], page.as_str());
    let cookie = response.headers()[header::SET_COOKIE]
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string();

    let response = send(
        &app,
        Request::get(page.as_str())
            .header(header::COOKIE, &cookie)
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("value=\"Shopping\""));
    assert!(html.contains(">Milk</textarea>"));

    let response = send(
        &app,
        Request::post(page.as_str())
            .header(header::COOKIE, &cookie)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("title=Groceries&body=Milk%0AEggs"))
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_string(response).await.is_empty());

    // The CLI reads the same database file.
    env.cmd()
        .show(user.as_str(), id.as_str())
        .assert()
        .success()
        .stdout(predicate::str::contains("# [Edit]: Groceries"))
        .stdout(predicate::str::contains("Milk\nEggs"));
}

#[tokio::test]
async fn other_users_session_cannot_see_note() {
    let env = TestEnv::new();
    let ann = env.add_user("ann@example.com");
    let bob = env.add_user("bob@example.com");
    let id = env.add_note(&ann, &TestNote::new("Private").body("secret"));

    let link = env.cmd().session(bob.as_str()).output_success();
    let path_and_query = link
        .trim()
        .strip_prefix("http://127.0.0.1:3000")
        .unwrap()
        .to_string();

    let app = app(&env);
    let response = send(
        &app,
        Request::get(path_and_query.as_str()).body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response.headers()[header::SET_COOKIE]
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string();

    let response = send(
        &app,
        Request::get(format!("/notes/{}/edit", id))
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.is_empty());
}

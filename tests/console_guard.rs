//! Guard behaviour of the console router, driven through `tower::ServiceExt`.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use paydesk::console::{self, GuardConfig};
use tower::ServiceExt;

async fn navigate(
    app: Router,
    path: &str,
    cookie: Option<&str>,
    referer: Option<&str>,
) -> (StatusCode, Option<String>) {
    let mut builder = Request::builder().uri(path);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    if let Some(referer) = referer {
        builder = builder.header(header::REFERER, referer);
    }
    let request = builder
        .body(Body::empty())
        .unwrap_or_else(|err| panic!("invalid request: {err}"));

    let response = app
        .oneshot(request)
        .await
        .unwrap_or_else(|err| panic!("router failed: {err}"));
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string);
    (response.status(), location)
}

fn app() -> Router {
    console::router(GuardConfig::default())
}

#[tokio::test]
async fn protected_page_without_session_redirects_to_login() {
    let (status, location) = navigate(app(), "/employees", None, None).await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location.as_deref(), Some("/login"));

    let (status, location) = navigate(app(), "/payroll/periods/3", None, None).await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location.as_deref(), Some("/login"));
}

#[tokio::test]
async fn login_page_with_session_redirects_to_landing() {
    let (status, location) = navigate(app(), "/login", Some("token=session-1"), None).await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location.as_deref(), Some("/dashboard"));
}

#[tokio::test]
async fn login_page_without_session_renders() {
    let (status, location) = navigate(app(), "/login", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(location, None);
}

#[tokio::test]
async fn session_reaches_protected_pages() {
    let (status, _) = navigate(app(), "/time-entries", Some("lang=en; token=abc"), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn empty_session_cookie_counts_as_missing() {
    let (status, location) = navigate(app(), "/dashboard", Some("token="), None).await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location.as_deref(), Some("/login"));
}

#[tokio::test]
async fn navigation_from_login_is_let_through() {
    let (status, _) = navigate(
        app(),
        "/dashboard",
        None,
        Some("http://localhost:8080/login"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, location) = navigate(
        app(),
        "/dashboard",
        None,
        Some("http://localhost:8080/login-help"),
    )
    .await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location.as_deref(), Some("/login"));
}

#[tokio::test]
async fn root_goes_through_the_guard() {
    let (_, location) = navigate(app(), "/", None, None).await;
    assert_eq!(location.as_deref(), Some("/login"));

    let (_, location) = navigate(app(), "/", Some("token=abc"), None).await;
    assert_eq!(location.as_deref(), Some("/dashboard"));
}

#[tokio::test]
async fn custom_cookie_and_paths() {
    let config = GuardConfig::default()
        .with_session_cookie("auth_token")
        .with_login_path("/signin")
        .with_landing_path("/employees");
    let app = console::router(config);

    let (_, location) = navigate(app.clone(), "/signin", Some("auth_token=1"), None).await;
    assert_eq!(location.as_deref(), Some("/employees"));

    let (_, location) = navigate(app, "/payroll", Some("token=abc"), None).await;
    assert_eq!(location.as_deref(), Some("/signin"));
}

#[tokio::test]
async fn health_is_not_guarded() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap_or_else(|err| panic!("invalid request: {err}")),
        )
        .await
        .unwrap_or_else(|err| panic!("router failed: {err}"));

    assert_eq!(response.status(), StatusCode::OK);
    let app_header = response
        .headers()
        .get("X-App")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(app_header.starts_with("paydesk:"));
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn request_id_is_propagated() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/login")
                .header("x-request-id", "01J0000000000000000000TEST")
                .body(Body::empty())
                .unwrap_or_else(|err| panic!("invalid request: {err}")),
        )
        .await
        .unwrap_or_else(|err| panic!("router failed: {err}"));

    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|value| value.to_str().ok()),
        Some("01J0000000000000000000TEST")
    );
}

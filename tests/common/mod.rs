//! In-process mock of the payroll backend: the Sanctum cookie endpoint plus
//! the handful of session API routes the client tests exercise.
#![allow(dead_code)]

use anyhow::Result;
use axum::{
    extract::State,
    http::{header::COOKIE, header::SET_COOKIE, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use paydesk::api::{ApiClient, ClientConfig};
use serde_json::{json, Value};
use std::{
    net::SocketAddr,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};
use tokio::net::TcpListener;

pub const EMPLOYEE_NUMBER: &str = "EMP001";
pub const PASSWORD: &str = "secret";
pub const SESSION_VALUE: &str = "session-1";

#[derive(Debug, Default)]
pub struct MockState {
    /// Requests to `/sanctum/csrf-cookie`.
    pub primes: AtomicUsize,
    /// Requests to the session API.
    pub api_hits: AtomicUsize,
    /// Upcoming API requests answered with 419 regardless of the token.
    pub force_mismatch: AtomicUsize,
    /// When set, the cookie endpoint expires the token instead of issuing one.
    pub withhold_token: AtomicBool,
    /// `X-XSRF-TOKEN` header of every API request, in order.
    pub seen_tokens: Mutex<Vec<Option<String>>>,
}

impl MockState {
    pub fn primes(&self) -> usize {
        self.primes.load(Ordering::SeqCst)
    }

    pub fn api_hits(&self) -> usize {
        self.api_hits.load(Ordering::SeqCst)
    }

    pub fn force_mismatches(&self, count: usize) {
        self.force_mismatch.store(count, Ordering::SeqCst);
    }

    pub fn withhold_token(&self) {
        self.withhold_token.store(true, Ordering::SeqCst);
    }

    pub fn seen_tokens(&self) -> Vec<Option<String>> {
        self.seen_tokens
            .lock()
            .map(|tokens| tokens.clone())
            .unwrap_or_default()
    }

    fn current_token(&self) -> String {
        format!("token-{}=", self.primes())
    }
}

pub struct MockBackend {
    pub addr: SocketAddr,
    pub state: Arc<MockState>,
}

impl MockBackend {
    pub async fn start() -> Result<Self> {
        let state = Arc::new(MockState::default());
        let app = Router::new()
            .route("/sanctum/csrf-cookie", get(csrf_cookie))
            .route("/test-csrf", post(test_csrf))
            .route("/api/v1/login", post(login))
            .route("/api/v1/auth-check", get(auth_check))
            .route("/api/v1/logout", post(logout))
            .route("/api/v1/employees", get(list_employees).post(create_employee))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Ok(Self { addr, state })
    }

    pub fn config(&self) -> ClientConfig {
        config_for(self.addr)
    }

    pub fn client(&self) -> Result<ApiClient> {
        Ok(ApiClient::new(self.config())?)
    }
}

/// Client configuration for a backend at `addr`, with no cookie settle delay.
pub fn config_for(addr: SocketAddr) -> ClientConfig {
    ClientConfig::new(format!("http://{addr}/api/v1"), format!("http://{addr}"))
        .with_cookie_settle_delay(Duration::ZERO)
        .with_timeout(Duration::from_secs(5))
}

async fn csrf_cookie(State(state): State<Arc<MockState>>) -> impl IntoResponse {
    let count = state.primes.fetch_add(1, Ordering::SeqCst) + 1;
    let cookie = if state.withhold_token.load(Ordering::SeqCst) {
        "XSRF-TOKEN=; Max-Age=0; path=/".to_string()
    } else {
        format!("XSRF-TOKEN=token-{count}%3D; Max-Age=7200; path=/; samesite=lax")
    };
    (StatusCode::NO_CONTENT, [(SET_COOKIE, cookie)])
}

async fn test_csrf(State(state): State<Arc<MockState>>, headers: HeaderMap) -> StatusCode {
    if token_header(&headers).as_deref() == Some(state.current_token().as_str()) {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::from_u16(419).unwrap_or(StatusCode::FORBIDDEN)
    }
}

async fn login(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Some(rejected) = verify_csrf(&state, &headers) {
        return rejected;
    }

    let number = body["employee_number"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();

    if number.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "message": "The employee number field is required.",
                "errors": { "employee_number": ["The employee number field is required."] }
            })),
        )
            .into_response();
    }

    if number == EMPLOYEE_NUMBER && password == PASSWORD {
        (
            [(SET_COOKIE, format!("token={SESSION_VALUE}; path=/; httponly"))],
            Json(json!({ "user": user_json() })),
        )
            .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid credentials" })),
        )
            .into_response()
    }
}

async fn auth_check(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    if let Some(rejected) = verify_csrf(&state, &headers) {
        return rejected;
    }

    if has_session(&headers) {
        Json(json!({ "user": user_json() })).into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Unauthenticated." })),
        )
            .into_response()
    }
}

async fn logout(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    if let Some(rejected) = verify_csrf(&state, &headers) {
        return rejected;
    }

    (
        StatusCode::NO_CONTENT,
        [(SET_COOKIE, "token=; Max-Age=0; path=/".to_string())],
    )
        .into_response()
}

async fn list_employees(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    if let Some(rejected) = verify_csrf(&state, &headers) {
        return rejected;
    }
    Json(json!([])).into_response()
}

async fn create_employee(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(_body): Json<Value>,
) -> Response {
    if let Some(rejected) = verify_csrf(&state, &headers) {
        return rejected;
    }
    (
        StatusCode::CREATED,
        Json(json!({ "message": "Employee created" })),
    )
        .into_response()
}

/// Records the request and answers 419 when forced to or when the header
/// does not match the last issued token.
fn verify_csrf(state: &MockState, headers: &HeaderMap) -> Option<Response> {
    state.api_hits.fetch_add(1, Ordering::SeqCst);
    let token = token_header(headers);
    if let Ok(mut seen) = state.seen_tokens.lock() {
        seen.push(token.clone());
    }

    let forced = state
        .force_mismatch
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
        .is_ok();

    if forced || token.as_deref() != Some(state.current_token().as_str()) {
        let status = StatusCode::from_u16(419).unwrap_or(StatusCode::FORBIDDEN);
        return Some(
            (status, Json(json!({ "message": "CSRF token mismatch." }))).into_response(),
        );
    }
    None
}

fn token_header(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-xsrf-token")
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string)
}

fn has_session(headers: &HeaderMap) -> bool {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.split_once('='))
        .any(|(name, value)| name.trim() == "token" && value.trim() == SESSION_VALUE)
}

fn user_json() -> Value {
    json!({
        "id": 1,
        "employee_number": EMPLOYEE_NUMBER,
        "name": "Ada Cruz",
        "role": "hr"
    })
}

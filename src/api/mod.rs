//! CSRF-aware client for the backend session API. Every call goes through
//! [`ApiClient::request`], which mirrors the `XSRF-TOKEN` cookie into the
//! `X-XSRF-TOKEN` header, primes the cookie when it is missing, and resends a
//! request once when the backend answers `419`. The client never writes
//! cookies itself and never logs token values.

pub mod config;
pub mod debug;
pub mod errors;
pub mod jar;

pub use config::ClientConfig;
pub use errors::ApiError;
pub use jar::SessionJar;

use crate::APP_USER_AGENT;
use config::CSRF_COOKIE_PATH;
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE},
    Client, Method, Response, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use std::{path::Path, sync::Arc};
use tokio::time::sleep;
use tracing::{debug, instrument, warn};
use url::Url;

/// Status Laravel uses for a CSRF token mismatch.
pub const CSRF_MISMATCH_STATUS: u16 = 419;

/// Result of a single send, before the retry policy is applied.
enum Attempt {
    Delivered(Response),
    CsrfMismatch(Response),
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    jar: Arc<SessionJar>,
    config: Arc<ClientConfig>,
    backend: Url,
}

impl ApiClient {
    /// Builds a client with an empty in-memory jar.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if a base URL is invalid or the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        Self::with_jar(config, Arc::new(SessionJar::new()))
    }

    /// Builds a client around an existing (possibly persisted) jar.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if a base URL is invalid or the HTTP client cannot be built.
    pub fn with_jar(config: ClientConfig, jar: Arc<SessionJar>) -> Result<Self, ApiError> {
        let backend = Url::parse(config.api_base_url()).map_err(|err| {
            ApiError::Config(format!("Invalid API base URL {}: {err}", config.api_base_url()))
        })?;
        Url::parse(config.sanctum_base_url()).map_err(|err| {
            ApiError::Config(format!(
                "Invalid Sanctum base URL {}: {err}",
                config.sanctum_base_url()
            ))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            "X-Requested-With",
            HeaderValue::from_static("XMLHttpRequest"),
        );

        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .default_headers(headers)
            .cookie_provider(jar.clone())
            .timeout(config.timeout())
            .build()
            .map_err(|err| ApiError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            jar,
            config: Arc::new(config),
            backend,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[must_use]
    pub fn jar(&self) -> &Arc<SessionJar> {
        &self.jar
    }

    /// Current CSRF token, percent-decoded, or an empty string when the jar has none.
    #[must_use]
    pub fn read_token(&self) -> String {
        self.jar
            .value(&self.backend, self.config.csrf_cookie_name())
            .map(|raw| decode_cookie_value(&raw))
            .unwrap_or_default()
    }

    /// Whether the jar holds a non-empty cookie named `name` for the backend.
    #[must_use]
    pub fn has_cookie(&self, name: &str) -> bool {
        self.jar
            .value(&self.backend, name)
            .is_some_and(|value| !value.is_empty())
    }

    /// Names of the cookies held for the backend, values omitted.
    #[must_use]
    pub fn cookie_names(&self) -> Vec<String> {
        self.jar.names(&self.backend)
    }

    /// Persists the jar so a later process can resume the session.
    ///
    /// # Errors
    /// Returns `ApiError::Storage` if the file cannot be written.
    pub fn persist(&self, path: &Path) -> Result<(), ApiError> {
        self.jar.save(path)
    }

    /// Asks the backend to set a fresh CSRF cookie and returns its value.
    ///
    /// Waits the configured settle delay before reading the jar back. Network
    /// failures are logged and yield an empty string so the substantive call
    /// fails on its own with a clear status.
    #[instrument(skip(self))]
    pub async fn prime_token(&self) -> String {
        let url = self.config.sanctum_url(CSRF_COOKIE_PATH);

        match self.http.get(&url).send().await {
            Ok(response) => debug!("CSRF cookie response status: {}", response.status()),
            Err(err) => {
                warn!("Error fetching CSRF token: {err}");
                return String::new();
            }
        }

        let delay = self.config.cookie_settle_delay();
        if !delay.is_zero() {
            sleep(delay).await;
        }

        let token = self.read_token();
        if token.is_empty() {
            warn!("No CSRF token found in cookies after request");
        }
        token
    }

    /// Sends a request with the CSRF header attached.
    ///
    /// Any status is returned as a `Response` except a `419` that survives the
    /// single refresh, which becomes `ApiError::Http`. Transport failures map
    /// to `ApiError::Connectivity`.
    ///
    /// # Errors
    /// Returns `ApiError` on transport failure, a repeated CSRF mismatch, or an
    /// unavailable token after refresh.
    #[instrument(skip(self, body), fields(method = %method))]
    pub async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ApiError> {
        let url = self.config.api_url(path);
        let payload = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|err| ApiError::Serialization(format!("Failed to encode request: {err}")))?;

        let mut token = self.read_token();
        if token.is_empty() {
            debug!("No CSRF token in cookies, fetching a new one");
            token = self.prime_token().await;
        }
        if token.is_empty() {
            warn!("No CSRF token available for request: {path}");
        }

        let first = self
            .send_once(&method, &url, payload.as_deref(), &token)
            .await?;
        let retried = match first {
            Attempt::Delivered(response) => return Ok(response),
            Attempt::CsrfMismatch(_) => {
                warn!("CSRF token mismatch, refreshing token");
                let refreshed = self.prime_token().await;
                if refreshed.is_empty() {
                    return Err(ApiError::Csrf(
                        "Failed to get CSRF token after refresh".to_string(),
                    ));
                }
                self.send_once(&method, &url, payload.as_deref(), &refreshed)
                    .await?
            }
        };

        match retried {
            Attempt::Delivered(response) => Ok(response),
            Attempt::CsrfMismatch(response) => {
                let body = response.text().await.unwrap_or_default();
                Err(ApiError::from_status(CSRF_MISMATCH_STATUS, &body))
            }
        }
    }

    /// GETs and decodes JSON.
    ///
    /// # Errors
    /// Returns `ApiError` on transport failure or any non-success status.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.request::<()>(Method::GET, path, None).await?;
        handle_json_response(response).await
    }

    /// GETs JSON and returns `None` on 204 or 401.
    ///
    /// # Errors
    /// Returns `ApiError` on transport failure or any other non-success status.
    pub async fn get_optional_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, ApiError> {
        let response = self.request::<()>(Method::GET, path, None).await?;
        handle_optional_json_response(response).await
    }

    /// # Errors
    /// Returns `ApiError` on transport failure or any non-success status.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.request(Method::POST, path, Some(body)).await?;
        handle_json_response(response).await
    }

    /// # Errors
    /// Returns `ApiError` on transport failure or any non-success status.
    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.request(Method::PUT, path, Some(body)).await?;
        handle_json_response(response).await
    }

    /// # Errors
    /// Returns `ApiError` on transport failure or any non-success status.
    pub async fn patch_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.request(Method::PATCH, path, Some(body)).await?;
        handle_json_response(response).await
    }

    /// Sends without a body and ignores the response body.
    ///
    /// # Errors
    /// Returns `ApiError` on transport failure or any non-success status.
    pub async fn send_empty(&self, method: Method, path: &str) -> Result<(), ApiError> {
        let response = self.request::<()>(method, path, None).await?;
        handle_empty_response(response).await
    }

    /// # Errors
    /// Returns `ApiError` on transport failure or any non-success status.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send_empty(Method::DELETE, path).await
    }

    /// POSTs the Sanctum `test-csrf` probe with the current token and returns
    /// the raw status. No priming and no retry.
    ///
    /// # Errors
    /// Returns `ApiError::Connectivity` if the backend cannot be reached.
    #[instrument(skip(self))]
    pub async fn probe_csrf(&self) -> Result<StatusCode, ApiError> {
        let token = self.read_token();
        let mut builder = self.http.post(self.config.sanctum_url("/test-csrf"));
        if !token.is_empty() {
            builder = builder.header(self.config.csrf_header_name(), token);
        }
        let response = builder.send().await.map_err(map_request_error)?;
        Ok(response.status())
    }

    async fn send_once(
        &self,
        method: &Method,
        url: &str,
        payload: Option<&[u8]>,
        token: &str,
    ) -> Result<Attempt, ApiError> {
        let mut builder = self.http.request(method.clone(), url);
        if !token.is_empty() {
            builder = builder.header(self.config.csrf_header_name(), token);
        }
        if let Some(payload) = payload {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(payload.to_vec());
        }

        let response = builder.send().await.map_err(map_request_error)?;
        debug!("{} {} -> {}", method, url, response.status());

        if response.status().as_u16() == CSRF_MISMATCH_STATUS {
            Ok(Attempt::CsrfMismatch(response))
        } else {
            Ok(Attempt::Delivered(response))
        }
    }
}

/// Percent-decodes a cookie value; undecodable input is returned as-is.
fn decode_cookie_value(raw: &str) -> String {
    urlencoding::decode(raw).map_or_else(|_| raw.to_string(), |value| value.into_owned())
}

/// Maps reqwest failures: anything without an HTTP response is a connectivity problem.
fn map_request_error(err: reqwest::Error) -> ApiError {
    if err.is_builder() {
        ApiError::Serialization(format!("Failed to build request: {err}"))
    } else if err.is_timeout() {
        ApiError::Connectivity(format!("request timed out: {err}"))
    } else {
        ApiError::Connectivity(format!("unable to reach the server: {err}"))
    }
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
/// An empty success body decodes as JSON `null`.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|err| ApiError::Parse(format!("Failed to read response: {err}")))?;

    if status.is_success() {
        let body = if body.trim().is_empty() { "null" } else { &body };
        serde_json::from_str(body)
            .map_err(|err| ApiError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(ApiError::from_status(status.as_u16(), &body))
    }
}

/// Parses optional JSON responses and treats 204/401 as absent.
async fn handle_optional_json_response<T: DeserializeOwned>(
    response: Response,
) -> Result<Option<T>, ApiError> {
    match response.status() {
        StatusCode::NO_CONTENT | StatusCode::UNAUTHORIZED => Ok(None),
        _ => handle_json_response(response).await.map(Some),
    }
}

/// Handles empty responses and returns sanitized HTTP errors when needed.
async fn handle_empty_response(response: Response) -> Result<(), ApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status.as_u16(), &body))
    }
}

//! Client configuration for the backend session API. Values are public
//! endpoints and tuning knobs; do not store secrets here.

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api/v1";
pub const DEFAULT_SANCTUM_BASE_URL: &str = "http://127.0.0.1:8000";
pub const CSRF_COOKIE_NAME: &str = "XSRF-TOKEN";
pub const CSRF_HEADER_NAME: &str = "X-XSRF-TOKEN";
pub const CSRF_COOKIE_PATH: &str = "/sanctum/csrf-cookie";
pub const SESSION_COOKIE_NAME: &str = "token";
/// Pause after the prime request before the jar is read again.
pub const DEFAULT_COOKIE_SETTLE_MS: u64 = 500;
/// Request timeout (seconds) applied to every backend call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Backend endpoints and CSRF handshake tuning.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    api_base_url: String,
    sanctum_base_url: String,
    csrf_cookie_name: String,
    csrf_header_name: String,
    session_cookie_name: String,
    cookie_settle_delay: Duration,
    timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            sanctum_base_url: DEFAULT_SANCTUM_BASE_URL.to_string(),
            csrf_cookie_name: CSRF_COOKIE_NAME.to_string(),
            csrf_header_name: CSRF_HEADER_NAME.to_string(),
            session_cookie_name: SESSION_COOKIE_NAME.to_string(),
            cookie_settle_delay: Duration::from_millis(DEFAULT_COOKIE_SETTLE_MS),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn new(api_base_url: impl Into<String>, sanctum_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            sanctum_base_url: sanctum_base_url.into(),
            ..Self::default()
        }
    }

    /// Overrides the wait between the prime response and re-reading the jar.
    ///
    /// This is a tolerance for cookie stores that commit asynchronously, not a
    /// synchronisation guarantee. Zero disables the wait.
    #[must_use]
    pub fn with_cookie_settle_delay(mut self, delay: Duration) -> Self {
        self.cookie_settle_delay = delay;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_session_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.session_cookie_name = name.into();
        self
    }

    #[must_use]
    pub fn with_csrf_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.csrf_cookie_name = name.into();
        self
    }

    #[must_use]
    pub fn with_csrf_header_name(mut self, name: impl Into<String>) -> Self {
        self.csrf_header_name = name.into();
        self
    }

    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    #[must_use]
    pub fn sanctum_base_url(&self) -> &str {
        &self.sanctum_base_url
    }

    #[must_use]
    pub fn csrf_cookie_name(&self) -> &str {
        &self.csrf_cookie_name
    }

    #[must_use]
    pub fn csrf_header_name(&self) -> &str {
        &self.csrf_header_name
    }

    #[must_use]
    pub fn session_cookie_name(&self) -> &str {
        &self.session_cookie_name
    }

    #[must_use]
    pub const fn cookie_settle_delay(&self) -> Duration {
        self.cookie_settle_delay
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Full URL of an API resource path.
    #[must_use]
    pub fn api_url(&self, path: &str) -> String {
        build_url_with_base(&self.api_base_url, path)
    }

    /// Full URL of a path served next to the Sanctum endpoints.
    #[must_use]
    pub fn sanctum_url(&self, path: &str) -> String {
        build_url_with_base(&self.sanctum_base_url, path)
    }
}

/// Joins a base URL and a path without doubling or dropping slashes.
pub(crate) fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

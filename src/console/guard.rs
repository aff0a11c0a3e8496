//! Route guard for the console. Before a page renders, the guard looks at the
//! session cookie alone and either lets the navigation through or redirects
//! between the login page and the landing page. It never calls the backend and
//! never fails; authorization is enforced server-side.

use axum::{
    extract::{Request, State},
    http::{
        header::{COOKIE, REFERER},
        HeaderMap,
    },
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::sync::Arc;
use tracing::debug;
use url::Url;

pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_LANDING_PATH: &str = "/dashboard";

pub const HEALTH_PATH: &str = "/health";

/// Console sections guarded together with their sub-paths.
pub const PROTECTED_SECTIONS: &[&str] = &[
    "/dashboard",
    "/employees",
    "/payroll",
    "/time-entries",
    "/profile",
    "/settings",
];

#[derive(Clone, Debug)]
pub struct GuardConfig {
    session_cookie: String,
    login_path: String,
    landing_path: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            session_cookie: crate::api::config::SESSION_COOKIE_NAME.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            landing_path: DEFAULT_LANDING_PATH.to_string(),
        }
    }
}

impl GuardConfig {
    #[must_use]
    pub fn with_session_cookie(mut self, name: impl Into<String>) -> Self {
        self.session_cookie = name.into();
        self
    }

    #[must_use]
    pub fn with_login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = path.into();
        self
    }

    #[must_use]
    pub fn with_landing_path(mut self, path: impl Into<String>) -> Self {
        self.landing_path = path.into();
        self
    }

    #[must_use]
    pub fn session_cookie(&self) -> &str {
        &self.session_cookie
    }

    #[must_use]
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    #[must_use]
    pub fn landing_path(&self) -> &str {
        &self.landing_path
    }

    /// Checks that the login and landing pages can be routed next to the
    /// root, the health check and the protected sections.
    ///
    /// # Errors
    /// Returns a message naming the conflicting path.
    pub fn validate(&self) -> Result<(), String> {
        let reserved = |path: &str| {
            path == "/"
                || path == HEALTH_PATH
                || PROTECTED_SECTIONS
                    .iter()
                    .any(|section| is_sub_path(path, section))
        };

        for path in [&self.login_path, &self.landing_path] {
            if !path.starts_with('/') || path.contains([':', '*', '{', '}']) {
                return Err(format!("{path} is not a plain absolute path"));
            }
        }
        if normalize(&self.login_path) == normalize(&self.landing_path) {
            return Err(format!(
                "login path and landing path are both {}",
                self.login_path
            ));
        }
        if reserved(&self.login_path)
            || PROTECTED_SECTIONS.contains(&self.login_path.as_str())
        {
            return Err(format!(
                "login path {} overlaps a console route",
                self.login_path
            ));
        }
        if reserved(&self.landing_path) {
            return Err(format!(
                "landing path {} overlaps a console route",
                self.landing_path
            ));
        }
        Ok(())
    }

    /// Whether the guard evaluates `path` at all. Assets, health checks and
    /// unknown paths are left alone.
    #[must_use]
    pub fn is_guarded(&self, path: &str) -> bool {
        path == "/"
            || path == self.login_path
            || path == self.landing_path
            || PROTECTED_SECTIONS
                .iter()
                .any(|section| path == *section || is_sub_path(path, section))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    PassThrough,
    Redirect(String),
}

/// Decides a navigation from the requested path, session presence and the
/// `referer` header.
///
/// - login page with a session: go to the landing page;
/// - any other page without a session: go to login, unless the navigation
///   came from the login page itself (this breaks redirect loops right after
///   sign-in, before the session cookie is visible);
/// - everything else passes.
#[must_use]
pub fn decide(
    config: &GuardConfig,
    path: &str,
    session_present: bool,
    referer: Option<&str>,
) -> GuardDecision {
    if path == config.login_path {
        if session_present {
            return GuardDecision::Redirect(config.landing_path.clone());
        }
        return GuardDecision::PassThrough;
    }

    if !session_present && !came_from(referer, &config.login_path) {
        return GuardDecision::Redirect(config.login_path.clone());
    }

    GuardDecision::PassThrough
}

/// Whether the request carries a non-empty cookie called `name`.
#[must_use]
pub fn session_present(headers: &HeaderMap, name: &str) -> bool {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.split_once('='))
        .any(|(key, value)| key.trim() == name && !value.trim().is_empty())
}

/// axum middleware applying [`decide`] to guarded paths.
pub async fn guard(
    State(config): State<Arc<GuardConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let decision = {
        let path = request.uri().path();
        if !config.is_guarded(path) {
            GuardDecision::PassThrough
        } else {
            let headers = request.headers();
            let referer = headers.get(REFERER).and_then(|value| value.to_str().ok());
            decide(
                &config,
                path,
                session_present(headers, &config.session_cookie),
                referer,
            )
        }
    };

    match decision {
        GuardDecision::PassThrough => next.run(request).await,
        GuardDecision::Redirect(target) => {
            debug!("Guard redirect {} -> {}", request.uri().path(), target);
            Redirect::temporary(&target).into_response()
        }
    }
}

fn is_sub_path(path: &str, section: &str) -> bool {
    path.strip_prefix(section)
        .is_some_and(|rest| rest.starts_with('/'))
}

/// Whether the referer's path is exactly `path`. Accepts absolute URLs and
/// bare paths.
fn came_from(referer: Option<&str>, path: &str) -> bool {
    let Some(referer) = referer.map(str::trim).filter(|r| !r.is_empty()) else {
        return false;
    };

    let referer_path = match Url::parse(referer) {
        Ok(url) => url.path().to_string(),
        Err(_) => referer
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
    };

    normalize(&referer_path) == normalize(path)
}

fn normalize(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn redirect(path: &str) -> GuardDecision {
        GuardDecision::Redirect(path.to_string())
    }

    #[test]
    fn login_with_session_goes_to_landing() {
        let config = GuardConfig::default();
        assert_eq!(decide(&config, "/login", true, None), redirect("/dashboard"));
        assert_eq!(decide(&config, "/login", false, None), GuardDecision::PassThrough);
    }

    #[test]
    fn protected_without_session_goes_to_login() {
        let config = GuardConfig::default();
        assert_eq!(decide(&config, "/dashboard", false, None), redirect("/login"));
        assert_eq!(decide(&config, "/dashboard", false, Some("")), redirect("/login"));
        assert_eq!(
            decide(&config, "/employees/EMP001", false, Some("http://console/payroll")),
            redirect("/login")
        );
        assert_eq!(decide(&config, "/", false, None), redirect("/login"));
    }

    #[test]
    fn referer_from_login_breaks_the_loop() {
        let config = GuardConfig::default();
        assert_eq!(
            decide(&config, "/dashboard", false, Some("/login")),
            GuardDecision::PassThrough
        );
        assert_eq!(
            decide(&config, "/dashboard", false, Some("http://localhost:3000/login?next=%2F")),
            GuardDecision::PassThrough
        );
        assert_eq!(
            decide(&config, "/dashboard", false, Some("http://localhost:3000/login-help")),
            redirect("/login")
        );
    }

    #[test]
    fn session_passes_protected_pages() {
        let config = GuardConfig::default();
        assert_eq!(decide(&config, "/settings", true, None), GuardDecision::PassThrough);
        assert_eq!(decide(&config, "/", true, None), GuardDecision::PassThrough);
    }

    #[test]
    fn custom_paths_are_honoured() {
        let config = GuardConfig::default()
            .with_login_path("/signin")
            .with_landing_path("/home");
        assert_eq!(decide(&config, "/signin", true, None), redirect("/home"));
        assert_eq!(decide(&config, "/payroll", false, None), redirect("/signin"));
        assert!(config.is_guarded("/home"));
    }

    #[test]
    fn matcher_covers_sections_and_sub_paths() {
        let config = GuardConfig::default();
        assert!(config.is_guarded("/"));
        assert!(config.is_guarded("/login"));
        assert!(config.is_guarded("/time-entries"));
        assert!(config.is_guarded("/employees/EMP001/edit"));
        assert!(!config.is_guarded("/health"));
        assert!(!config.is_guarded("/employeesx"));
        assert!(!config.is_guarded("/static/app.css"));
    }

    #[test]
    fn overlapping_paths_are_rejected() {
        assert!(GuardConfig::default().validate().is_ok());
        assert!(GuardConfig::default()
            .with_login_path("/signin")
            .with_landing_path("/home")
            .validate()
            .is_ok());

        for login in ["/", "/settings", "/payroll/login", "/health", "/dashboard"] {
            let config = GuardConfig::default().with_login_path(login);
            assert!(config.validate().is_err(), "login {login} accepted");
        }
        for landing in ["/", "/login", "/health", "/employees/EMP001", "/:page"] {
            let config = GuardConfig::default().with_landing_path(landing);
            assert!(config.validate().is_err(), "landing {landing} accepted");
        }
        assert!(GuardConfig::default()
            .with_landing_path("/employees")
            .validate()
            .is_ok());
    }

    #[test]
    fn session_cookie_must_be_non_empty() {
        let mut headers = HeaderMap::new();
        assert!(!session_present(&headers, "token"));

        headers.insert(COOKIE, HeaderValue::from_static("XSRF-TOKEN=abc; token="));
        assert!(!session_present(&headers, "token"));

        headers.insert(COOKIE, HeaderValue::from_static("XSRF-TOKEN=abc; token=session-1"));
        assert!(session_present(&headers, "token"));
        assert!(!session_present(&headers, "auth_token"));
    }
}

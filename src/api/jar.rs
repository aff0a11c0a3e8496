//! Client-side cookie jar. The backend writes it through `Set-Cookie` headers
//! (via reqwest's `CookieStore` seam) and the client only reads from it; no
//! code in this crate mints cookie values. Expiry, domain and path rules follow
//! RFC 6265 as implemented by `cookie_store`. The jar can be persisted to disk
//! so successive CLI runs share one backend session.

use super::errors::ApiError;
use cookie_store::CookieStore as Store;
use reqwest::{cookie::CookieStore, header::HeaderValue};
use reqwest_cookie_store::CookieStoreRwLock;
use std::{
    fmt,
    fs::File,
    io::{BufReader, BufWriter, ErrorKind},
    path::Path,
    sync::{PoisonError, RwLockReadGuard},
};
use tracing::{debug, trace};
use url::Url;

#[derive(Default)]
pub struct SessionJar {
    store: CookieStoreRwLock,
}

impl fmt::Debug for SessionJar {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SessionJar")
            .field("cookies", &self.read().iter_unexpired().count())
            .finish()
    }
}

impl SessionJar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a persisted jar; a missing file yields an empty jar. Cookies that
    /// expired while on disk stay invisible to every lookup.
    ///
    /// # Errors
    /// Returns `ApiError::Storage` if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ApiError> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("No session file at {}, starting empty", path.display());
                return Ok(Self::new());
            }
            Err(err) => {
                return Err(ApiError::Storage(format!(
                    "Failed to read {}: {err}",
                    path.display()
                )))
            }
        };

        let store = cookie_store::serde::json::load_all(BufReader::new(file)).map_err(|err| {
            ApiError::Storage(format!("Failed to parse {}: {err}", path.display()))
        })?;

        Ok(Self {
            store: CookieStoreRwLock::new(store),
        })
    }

    /// Writes the jar to `path`, replacing any previous content. Session
    /// cookies (no `Expires`/`Max-Age`) are kept so the next run can resume.
    ///
    /// # Errors
    /// Returns `ApiError::Storage` if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ApiError> {
        let file = File::create(path)
            .map_err(|err| ApiError::Storage(format!("Failed to write {}: {err}", path.display())))?;
        let mut writer = BufWriter::new(file);
        cookie_store::serde::json::save_incl_expired_and_nonpersistent(&self.read(), &mut writer)
            .map_err(|err| {
                ApiError::Storage(format!("Failed to encode session {}: {err}", path.display()))
            })
    }

    /// Raw (still percent-encoded) value of the live cookie `name` sent to `url`.
    #[must_use]
    pub fn value(&self, url: &Url, name: &str) -> Option<String> {
        self.read()
            .matches(url)
            .into_iter()
            .find(|cookie| cookie.name() == name)
            .map(|cookie| cookie.value().to_string())
    }

    /// Names of the live cookies sent to `url`.
    #[must_use]
    pub fn names(&self, url: &Url) -> Vec<String> {
        self.read()
            .matches(url)
            .into_iter()
            .map(|cookie| cookie.name().to_string())
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().iter_unexpired().next().is_none()
    }

    fn read(&self) -> RwLockReadGuard<'_, Store> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CookieStore for SessionJar {
    fn set_cookies(&self, cookie_headers: &mut dyn Iterator<Item = &HeaderValue>, url: &Url) {
        trace!("Storing backend cookies for {}", url.path());
        self.store.set_cookies(cookie_headers, url);
    }

    fn cookies(&self, url: &Url) -> Option<HeaderValue> {
        self.store.cookies(url)
    }
}

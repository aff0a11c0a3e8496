//! In-memory auth session. Holds only non-sensitive user metadata; the session
//! itself lives in the backend cookie held by the API client's jar.

use crate::{
    api::{ApiClient, ApiError},
    features::auth::{
        client,
        types::{valid_employee_number, AuthenticatedUser, LoginRequest, RolePolicy, UserEnvelope},
    },
};
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

/// Auth session shared by whoever needs the current user. Clones share state.
#[derive(Clone, Debug, Default)]
pub struct AuthSession {
    user: Arc<RwLock<Option<AuthenticatedUser>>>,
    policy: RolePolicy,
}

impl AuthSession {
    #[must_use]
    pub fn new(policy: RolePolicy) -> Self {
        Self {
            user: Arc::new(RwLock::new(None)),
            policy,
        }
    }

    #[must_use]
    pub const fn policy(&self) -> RolePolicy {
        self.policy
    }

    pub async fn current(&self) -> Option<AuthenticatedUser> {
        self.user.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.user.read().await.is_some()
    }

    /// Updates the in-memory user after a successful login or check.
    pub async fn set_user(&self, user: AuthenticatedUser) {
        *self.user.write().await = Some(user);
    }

    /// Clears the in-memory user, typically on logout.
    pub async fn clear(&self) {
        *self.user.write().await = None;
    }

    /// Whether the client's jar holds the session indicator cookie.
    #[must_use]
    pub fn has_session(&self, api: &ApiClient) -> bool {
        api.has_cookie(api.config().session_cookie_name())
    }

    /// Signs in and stores the user with the role policy applied.
    ///
    /// # Errors
    /// `Validation` for malformed input or a 422, `Unauthorized` for bad
    /// credentials, `Connectivity` when the backend is unreachable, `Parse`
    /// when a success response carries no user.
    #[instrument(skip(self, api, password))]
    pub async fn login(
        &self,
        api: &ApiClient,
        employee_number: &str,
        password: SecretString,
    ) -> Result<AuthenticatedUser, ApiError> {
        let employee_number = employee_number.trim();
        validate_credentials(employee_number, &password)?;

        let request = LoginRequest {
            employee_number: employee_number.to_string(),
            password,
        };

        let envelope = client::login(api, &request).await.inspect_err(|err| {
            warn!("Login error: {err}");
        })?;

        let user = envelope
            .user
            .ok_or_else(|| ApiError::Parse("No user data in response".to_string()))?;
        let user = self.policy.apply(user);

        self.set_user(user.clone()).await;
        info!("Signed in as {}", user.employee_number);

        Ok(user)
    }

    /// Asks the backend whether the session is still valid. Never fails: any
    /// error or non-success status clears the user and yields `false`.
    #[instrument(skip(self, api))]
    pub async fn check(&self, api: &ApiClient) -> bool {
        match client::auth_check(api).await {
            Ok(Some(UserEnvelope { user: Some(user) })) => {
                self.set_user(self.policy.apply(user)).await;
                true
            }
            Ok(_) => {
                debug!("No authenticated user");
                self.clear().await;
                false
            }
            Err(err) => {
                warn!("Auth check error: {err}");
                self.clear().await;
                false
            }
        }
    }

    /// Ends the backend session. The cached user is cleared whatever the
    /// backend answers.
    ///
    /// # Errors
    /// Returns the backend or transport failure after clearing local state.
    #[instrument(skip(self, api))]
    pub async fn logout(&self, api: &ApiClient) -> Result<(), ApiError> {
        let result = client::logout(api).await;
        self.clear().await;

        if let Err(err) = &result {
            warn!("Logout error: {err}");
        }
        result
    }
}

fn validate_credentials(employee_number: &str, password: &SecretString) -> Result<(), ApiError> {
    if employee_number.is_empty() {
        return Err(ApiError::invalid("Employee number is required."));
    }
    if !valid_employee_number(employee_number) {
        return Err(ApiError::invalid(
            "Employee number may only contain letters, digits and dashes.",
        ));
    }
    if password.expose_secret().is_empty() {
        return Err(ApiError::invalid("Password is required."));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::types::Role;

    fn secret(value: &str) -> SecretString {
        SecretString::from(value.to_string())
    }

    #[test]
    fn credentials_are_checked_locally() {
        assert!(validate_credentials("EMP001", &secret("pw")).is_ok());
        assert!(matches!(
            validate_credentials("", &secret("pw")),
            Err(ApiError::Validation { .. })
        ));
        assert!(matches!(
            validate_credentials("EMP 001", &secret("pw")),
            Err(ApiError::Validation { .. })
        ));
        assert!(matches!(
            validate_credentials("EMP001", &secret("")),
            Err(ApiError::Validation { .. })
        ));
    }

    #[tokio::test]
    async fn clones_share_the_current_user() {
        let session = AuthSession::new(RolePolicy::UniformAdmin);
        let other = session.clone();
        assert!(!other.is_authenticated().await);

        session
            .set_user(AuthenticatedUser {
                id: 1,
                employee_number: "EMP001".to_string(),
                name: "Ada".to_string(),
                role: Role::admin(),
            })
            .await;
        assert_eq!(
            other.current().await.map(|user| user.employee_number),
            Some("EMP001".to_string())
        );

        other.clear().await;
        assert!(!session.is_authenticated().await);
    }
}

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};
use std::{fmt, str::FromStr, sync::LazyLock};

static EMPLOYEE_NUMBER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9-]+$").ok());

/// Employee numbers are alphanumeric with dashes, e.g. `EMP-001`.
#[must_use]
pub fn valid_employee_number(value: &str) -> bool {
    EMPLOYEE_NUMBER
        .as_ref()
        .is_some_and(|re| re.is_match(value))
}

/// Credentials posted to `/login`. The backend expects snake case here.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub employee_number: String,
    #[serde(serialize_with = "expose_password")]
    pub password: SecretString,
}

fn expose_password<S: Serializer>(password: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(password.expose_secret())
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    #[must_use]
    pub fn admin() -> Self {
        Self("admin".to_string())
    }

    #[must_use]
    pub fn unassigned() -> Self {
        Self("unassigned".to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.0 == "admin"
    }
}

impl fmt::Display for Role {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// How the role of a signed-in user is derived.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RolePolicy {
    /// Every authenticated user is an administrator; there are no role-based
    /// restrictions in the console.
    #[default]
    UniformAdmin,
    /// The backend's `role` field is used as-is.
    FromServer,
}

impl RolePolicy {
    #[must_use]
    pub fn apply(self, user: ServerUser) -> AuthenticatedUser {
        let role = match self {
            Self::UniformAdmin => Role::admin(),
            Self::FromServer => user
                .role
                .filter(|role| !role.trim().is_empty())
                .map_or_else(Role::unassigned, Role),
        };

        AuthenticatedUser {
            id: user.id,
            employee_number: user.employee_number,
            name: user.name,
            role,
        }
    }
}

impl FromStr for RolePolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "uniform-admin" => Ok(Self::UniformAdmin),
            "from-server" => Ok(Self::FromServer),
            other => Err(format!(
                "invalid role policy: {other} (expected uniform-admin or from-server)"
            )),
        }
    }
}

/// User as returned by `/login` and `/auth-check`.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerUser {
    pub id: u64,
    #[serde(alias = "employeeNumber")]
    pub employee_number: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Envelope of `/login` and `/auth-check` responses.
#[derive(Debug, Deserialize)]
pub struct UserEnvelope {
    #[serde(default)]
    pub user: Option<ServerUser>,
}

/// Signed-in user after the role policy is applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    pub id: u64,
    pub employee_number: String,
    pub name: String,
    pub role: Role,
}

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub employee_number: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

/// New console account. The password is only exposed when serialized.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccountForm {
    pub name: String,
    pub email: String,
    #[serde(serialize_with = "expose_password")]
    pub password: SecretString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_number: Option<String>,
}

fn expose_password<S: Serializer>(password: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(password.expose_secret())
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatusUpdate {
    pub is_active: bool,
}

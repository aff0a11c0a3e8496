use crate::{
    api::debug::inspect_token,
    cli::{
        actions::{print_json, with_client},
        globals::GlobalArgs,
    },
    features::auth::AuthSession,
};
use anyhow::{Context, Result};
use secrecy::SecretString;
use serde_json::json;

#[derive(Debug)]
pub enum Operation {
    Login {
        employee_number: String,
        password: SecretString,
    },
    Logout,
    WhoAmI,
    Csrf {
        refresh: bool,
        probe: bool,
    },
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub operation: Operation,
}

/// Execute a session action.
/// # Errors
/// Returns an error if the backend rejects the request or is unreachable.
pub async fn execute(args: Args) -> Result<()> {
    let Args { globals, operation } = args;
    let session = AuthSession::new(globals.role_policy);

    with_client(&globals, |api| async move {
        match operation {
            Operation::Login {
                employee_number,
                password,
            } => {
                let user = session
                    .login(&api, &employee_number, password)
                    .await
                    .context("Login failed")?;
                print_json(&user)
            }
            Operation::Logout => {
                session.logout(&api).await.context("Logout failed")?;
                print_json(&json!({ "authenticated": false }))
            }
            Operation::WhoAmI => {
                let authenticated = session.check(&api).await;
                let user = session.current().await;
                print_json(&json!({
                    "authenticated": authenticated,
                    "sessionCookie": session.has_session(&api),
                    "user": user,
                }))
            }
            Operation::Csrf { refresh, probe } => {
                if refresh || api.read_token().is_empty() {
                    api.prime_token().await;
                }
                let token = api.read_token();

                let probe_status = if probe {
                    let status = api.probe_csrf().await.context("CSRF probe failed")?;
                    Some(status.as_u16())
                } else {
                    None
                };

                print_json(&json!({
                    "cookies": api.cookie_names(),
                    "tokenPresent": !token.is_empty(),
                    "tokenLength": token.len(),
                    "decoded": inspect_token(&token),
                    "probeStatus": probe_status,
                }))
            }
        }
    })
    .await
}

pub mod dashboard;
pub mod employees;
pub mod payroll;
pub mod serve;
pub mod session;
pub mod time_entries;
pub mod users;

// Internal "interpreter" for `Action`.
// We keep the match in a separate module so `mod.rs` stays small as more actions are added.
mod run;

use crate::{api::ApiClient, cli::globals::GlobalArgs};
use anyhow::Result;
use serde::Serialize;
use std::future::Future;
use tracing::warn;

#[derive(Debug)]
pub enum Action {
    Serve(serve::Args),
    Session(session::Args),
    Dashboard(dashboard::Args),
    Employees(employees::Args),
    Payroll(payroll::Args),
    TimeEntries(time_entries::Args),
    Users(users::Args),
}

impl Action {
    // Convenience wrapper so call sites can do `action.execute().await`.
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> Result<()> {
        run::execute(self).await
    }
}

/// Runs `operation` with a client built on the persisted session, then saves
/// the cookies the backend set, whether or not the operation succeeded.
/// A failed operation wins over a failed save, which is only logged.
pub(crate) async fn with_client<F, Fut>(globals: &GlobalArgs, operation: F) -> Result<()>
where
    F: FnOnce(ApiClient) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let api = globals.api_client()?;
    let outcome = operation(api.clone()).await;
    let saved = globals.persist(&api);

    match (outcome, saved) {
        (Err(err), Err(save_err)) => {
            warn!("{save_err:#}");
            Err(err)
        }
        (Err(err), Ok(())) => Err(err),
        (Ok(()), saved) => saved,
    }
}

/// Prints command output as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

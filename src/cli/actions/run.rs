use crate::cli::actions::{
    dashboard, employees, payroll, serve, session, time_entries, users, Action,
};
use anyhow::Result;

/// Execute the provided action.
// This is the single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Serve(args) => serve::execute(args).await,
        Action::Session(args) => session::execute(args).await,
        Action::Dashboard(args) => dashboard::execute(args).await,
        Action::Employees(args) => employees::execute(args).await,
        Action::Payroll(args) => payroll::execute(args).await,
        Action::TimeEntries(args) => time_entries::execute(args).await,
        Action::Users(args) => users::execute(args).await,
    }
}

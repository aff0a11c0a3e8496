use crate::{
    cli::{
        actions::{print_json, with_client},
        globals::GlobalArgs,
    },
    features::time_entries::{self, client, TimeEntryForm},
};
use anyhow::{Context, Result};
use serde_json::json;

#[derive(Debug)]
pub enum Operation {
    List {
        date: Option<String>,
        employee_number: Option<String>,
        search: Option<String>,
    },
    Create(TimeEntryForm),
    Delete(u64),
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub operation: Operation,
}

/// Execute a time-entry action.
/// # Errors
/// Returns an error if the backend call fails.
pub async fn execute(args: Args) -> Result<()> {
    let Args { globals, operation } = args;

    with_client(&globals, |api| async move {
        match operation {
            Operation::List {
                date,
                employee_number,
                search,
            } => {
                let entries = match employee_number {
                    Some(number) => client::for_employee(&api, &number).await,
                    None => client::list(&api).await,
                }
                .context("Failed to fetch time entries")?;
                print_json(&time_entries::filter(
                    &entries,
                    date.as_deref(),
                    search.as_deref(),
                ))
            }
            Operation::Create(form) => {
                let created = client::create(&api, &form)
                    .await
                    .context("Failed to add time entry")?;
                print_json(&created)
            }
            Operation::Delete(id) => {
                client::delete(&api, id)
                    .await
                    .with_context(|| format!("Failed to delete time entry {id}"))?;
                print_json(&json!({ "deleted": id }))
            }
        }
    })
    .await
}

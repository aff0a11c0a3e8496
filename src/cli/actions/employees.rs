use crate::{
    cli::{
        actions::{print_json, with_client},
        globals::GlobalArgs,
    },
    features::employees::{self, client, EmployeeFilter, EmployeeForm},
};
use anyhow::{Context, Result};
use serde_json::json;
use std::{fs, path::Path, path::PathBuf};

#[derive(Debug)]
pub enum Operation {
    List(EmployeeFilter),
    Departments,
    Show(String),
    Create(PathBuf),
    Update(String, PathBuf),
    Delete(String),
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub operation: Operation,
}

/// Execute an employee action.
/// # Errors
/// Returns an error if the form file is invalid or the backend call fails.
pub async fn execute(args: Args) -> Result<()> {
    let Args { globals, operation } = args;

    with_client(&globals, |api| async move {
        match operation {
            Operation::List(filter) => {
                let all = client::list(&api).await.context("Failed to fetch employees")?;
                print_json(&employees::filter(&all, &filter))
            }
            Operation::Departments => {
                let all = client::list(&api).await.context("Failed to fetch employees")?;
                print_json(&employees::departments(&all))
            }
            Operation::Show(number) => {
                let employee = client::show(&api, &number)
                    .await
                    .with_context(|| format!("Failed to fetch employee {number}"))?;
                print_json(&employee)
            }
            Operation::Create(path) => {
                let form = read_form(&path)?;
                let created = client::create(&api, &form)
                    .await
                    .context("Failed to add employee")?;
                print_json(&created)
            }
            Operation::Update(number, path) => {
                let form = read_form(&path)?;
                let updated = client::update(&api, &number, &form)
                    .await
                    .with_context(|| format!("Failed to update employee {number}"))?;
                print_json(&updated)
            }
            Operation::Delete(number) => {
                client::delete(&api, &number)
                    .await
                    .with_context(|| format!("Failed to delete employee {number}"))?;
                print_json(&json!({ "deleted": number }))
            }
        }
    })
    .await
}

fn read_form(path: &Path) -> Result<EmployeeForm> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid employee form in {}", path.display()))
}

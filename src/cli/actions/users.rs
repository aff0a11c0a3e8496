use crate::{
    cli::{
        actions::{print_json, with_client},
        globals::GlobalArgs,
    },
    features::users::{client, UserAccountForm},
};
use anyhow::{Context, Result};

#[derive(Debug)]
pub enum Operation {
    List,
    Create(UserAccountForm),
    SetActive { id: u64, active: bool },
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub operation: Operation,
}

/// Execute a user-account action.
/// # Errors
/// Returns an error if the backend call fails.
pub async fn execute(args: Args) -> Result<()> {
    let Args { globals, operation } = args;

    with_client(&globals, |api| async move {
        match operation {
            Operation::List => {
                let users = client::list(&api).await.context("Failed to fetch users")?;
                print_json(&users)
            }
            Operation::Create(form) => {
                let created = client::create(&api, &form)
                    .await
                    .context("Failed to add user")?;
                print_json(&created)
            }
            Operation::SetActive { id, active } => {
                let updated = client::set_active(&api, id, active)
                    .await
                    .with_context(|| format!("Failed to update user {id}"))?;
                print_json(&updated)
            }
        }
    })
    .await
}

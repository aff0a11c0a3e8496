use crate::{
    cli::{
        actions::{print_json, with_client},
        globals::GlobalArgs,
    },
    features::dashboard,
};
use anyhow::{Context, Result};

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
}

/// Execute the dashboard action.
/// # Errors
/// Returns an error if any of the dashboard lists cannot be fetched.
pub async fn execute(args: Args) -> Result<()> {
    with_client(&args.globals, |api| async move {
        let stats = dashboard::fetch(&api)
            .await
            .context("Failed to fetch dashboard data")?;
        print_json(&stats)
    })
    .await
}

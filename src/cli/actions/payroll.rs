use crate::{
    cli::{
        actions::{print_json, with_client},
        globals::GlobalArgs,
    },
    features::payroll::{self, client, PayrollPeriodForm},
};
use anyhow::{Context, Result};
use serde_json::json;

#[derive(Debug)]
pub enum Operation {
    Periods,
    CreatePeriod(PayrollPeriodForm),
    Entries {
        period_id: Option<u64>,
        employee_number: Option<String>,
        search: Option<String>,
    },
    Calculate {
        employee_number: String,
        period_id: u64,
    },
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub operation: Operation,
}

/// Execute a payroll action.
/// # Errors
/// Returns an error if the backend call fails.
pub async fn execute(args: Args) -> Result<()> {
    let Args { globals, operation } = args;

    with_client(&globals, |api| async move {
        match operation {
            Operation::Periods => {
                let periods = client::list_periods(&api)
                    .await
                    .context("Failed to fetch payroll periods")?;
                print_json(&periods)
            }
            Operation::CreatePeriod(form) => {
                let created = client::create_period(&api, &form)
                    .await
                    .context("Failed to add payroll period")?;
                print_json(&created)
            }
            Operation::Entries {
                period_id,
                employee_number,
                search,
            } => {
                let entries = match employee_number {
                    Some(number) => client::employee_entries(&api, &number).await,
                    None => client::list_entries(&api).await,
                }
                .context("Failed to fetch payroll entries")?;
                print_json(&payroll::filter_entries(
                    &entries,
                    period_id,
                    search.as_deref(),
                ))
            }
            Operation::Calculate {
                employee_number,
                period_id,
            } => {
                client::calculate(&api, &employee_number, period_id)
                    .await
                    .context("Failed to calculate payroll")?;
                print_json(&json!({
                    "calculated": employee_number,
                    "payrollPeriodId": period_id,
                }))
            }
        }
    })
    .await
}

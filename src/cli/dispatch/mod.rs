//! Maps validated CLI matches to an [`Action`].

use crate::{
    cli::{
        actions::{dashboard, employees, payroll, serve, session, time_entries, users, Action},
        commands::{backend, console, resources, session as session_cmd},
        globals::GlobalArgs,
    },
    console::GuardConfig,
    features::{
        employees::EmployeeFilter, payroll::PayrollPeriodForm, time_entries::TimeEntryForm,
        users::UserAccountForm,
    },
};
use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use secrecy::SecretString;
use std::path::PathBuf;

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let globals = backend::parse(matches)?;

    let (name, sub) = matches
        .subcommand()
        .ok_or_else(|| anyhow!("missing subcommand"))?;

    match name {
        console::CMD_SERVE => serve_action(sub, &globals),
        session_cmd::CMD_LOGIN => Ok(Action::Session(session::Args {
            operation: session::Operation::Login {
                employee_number: required(sub, session_cmd::ARG_EMPLOYEE_NUMBER)?,
                password: SecretString::from(required(sub, session_cmd::ARG_PASSWORD)?),
            },
            globals,
        })),
        session_cmd::CMD_LOGOUT => Ok(Action::Session(session::Args {
            globals,
            operation: session::Operation::Logout,
        })),
        session_cmd::CMD_WHOAMI => Ok(Action::Session(session::Args {
            globals,
            operation: session::Operation::WhoAmI,
        })),
        session_cmd::CMD_CSRF => Ok(Action::Session(session::Args {
            globals,
            operation: session::Operation::Csrf {
                refresh: sub.get_flag(session_cmd::ARG_REFRESH),
                probe: sub.get_flag(session_cmd::ARG_PROBE),
            },
        })),
        resources::CMD_DASHBOARD => Ok(Action::Dashboard(dashboard::Args { globals })),
        resources::CMD_EMPLOYEES => Ok(Action::Employees(employees::Args {
            operation: employees_operation(sub)?,
            globals,
        })),
        resources::CMD_PAYROLL => Ok(Action::Payroll(payroll::Args {
            operation: payroll_operation(sub)?,
            globals,
        })),
        resources::CMD_TIME_ENTRIES => Ok(Action::TimeEntries(time_entries::Args {
            operation: time_entries_operation(sub)?,
            globals,
        })),
        resources::CMD_USERS => Ok(Action::Users(users::Args {
            operation: users_operation(sub)?,
            globals,
        })),
        other => Err(anyhow!("unknown subcommand: {other}")),
    }
}

fn serve_action(sub: &ArgMatches, globals: &GlobalArgs) -> Result<Action> {
    let port = sub.get_one::<u16>(console::ARG_PORT).copied().unwrap_or(8080);
    let guard = GuardConfig::default()
        .with_session_cookie(globals.session_cookie.clone())
        .with_login_path(required(sub, console::ARG_LOGIN_PATH)?)
        .with_landing_path(required(sub, console::ARG_LANDING_PATH)?);
    guard
        .validate()
        .map_err(|err| anyhow!("invalid console paths: {err}"))?;

    Ok(Action::Serve(serve::Args { port, guard }))
}

fn employees_operation(matches: &ArgMatches) -> Result<employees::Operation> {
    let (name, sub) = nested(matches)?;
    let operation = match name {
        "list" => employees::Operation::List(EmployeeFilter {
            search: optional(sub, resources::ARG_SEARCH),
            department: optional(sub, resources::ARG_DEPARTMENT),
            employment_status: optional(sub, resources::ARG_STATUS),
        }),
        "departments" => employees::Operation::Departments,
        "show" => employees::Operation::Show(required(sub, resources::ARG_NUMBER)?),
        "create" => employees::Operation::Create(PathBuf::from(required(sub, resources::ARG_FILE)?)),
        "update" => employees::Operation::Update(
            required(sub, resources::ARG_NUMBER)?,
            PathBuf::from(required(sub, resources::ARG_FILE)?),
        ),
        "delete" => employees::Operation::Delete(required(sub, resources::ARG_NUMBER)?),
        other => return Err(anyhow!("unknown employees command: {other}")),
    };
    Ok(operation)
}

fn payroll_operation(matches: &ArgMatches) -> Result<payroll::Operation> {
    let (name, sub) = nested(matches)?;
    let operation = match name {
        "periods" => payroll::Operation::Periods,
        "create-period" => payroll::Operation::CreatePeriod(PayrollPeriodForm {
            period_start: required(sub, resources::ARG_START)?,
            period_end: required(sub, resources::ARG_END)?,
            payment_date: required(sub, resources::ARG_PAYMENT_DATE)?,
            status: required(sub, resources::ARG_STATUS)?,
        }),
        "entries" => payroll::Operation::Entries {
            period_id: sub.get_one::<u64>(resources::ARG_PERIOD).copied(),
            employee_number: optional(sub, resources::ARG_NUMBER),
            search: optional(sub, resources::ARG_SEARCH),
        },
        "calculate" => payroll::Operation::Calculate {
            employee_number: required(sub, resources::ARG_NUMBER)?,
            period_id: sub
                .get_one::<u64>(resources::ARG_PERIOD)
                .copied()
                .context("missing required argument: period")?,
        },
        other => return Err(anyhow!("unknown payroll command: {other}")),
    };
    Ok(operation)
}

fn time_entries_operation(matches: &ArgMatches) -> Result<time_entries::Operation> {
    let (name, sub) = nested(matches)?;
    let operation = match name {
        "list" => time_entries::Operation::List {
            date: optional(sub, resources::ARG_DATE),
            employee_number: optional(sub, resources::ARG_NUMBER),
            search: optional(sub, resources::ARG_SEARCH),
        },
        "create" => time_entries::Operation::Create(TimeEntryForm {
            employee_number: required(sub, resources::ARG_NUMBER)?,
            clock_in: required(sub, resources::ARG_CLOCK_IN)?,
            clock_out: optional(sub, resources::ARG_CLOCK_OUT),
        }),
        "delete" => time_entries::Operation::Delete(
            sub.get_one::<u64>(resources::ARG_ID)
                .copied()
                .context("missing required argument: id")?,
        ),
        other => return Err(anyhow!("unknown time-entries command: {other}")),
    };
    Ok(operation)
}

fn users_operation(matches: &ArgMatches) -> Result<users::Operation> {
    let (name, sub) = nested(matches)?;
    let id = || {
        sub.get_one::<u64>(resources::ARG_ID)
            .copied()
            .context("missing required argument: id")
    };
    let operation = match name {
        "list" => users::Operation::List,
        "create" => users::Operation::Create(UserAccountForm {
            name: required(sub, resources::ARG_NAME)?,
            email: required(sub, resources::ARG_EMAIL)?,
            password: SecretString::from(required(sub, resources::ARG_PASSWORD)?),
            employee_number: optional(sub, resources::ARG_NUMBER),
        }),
        "activate" => users::Operation::SetActive {
            id: id()?,
            active: true,
        },
        "deactivate" => users::Operation::SetActive {
            id: id()?,
            active: false,
        },
        other => return Err(anyhow!("unknown users command: {other}")),
    };
    Ok(operation)
}

fn nested(matches: &ArgMatches) -> Result<(&str, &ArgMatches)> {
    matches
        .subcommand()
        .ok_or_else(|| anyhow!("missing subcommand"))
}

fn required(matches: &ArgMatches, id: &str) -> Result<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| anyhow!("missing required argument: --{id}"))
}

/// Helper to filter empty strings which clap might pass through if env vars are set to ""
fn optional(matches: &ArgMatches, id: &str) -> Option<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .filter(|v| !v.trim().is_empty())
}

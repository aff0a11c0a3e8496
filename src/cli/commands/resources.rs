use clap::{Arg, Command};

pub const CMD_DASHBOARD: &str = "dashboard";
pub const CMD_EMPLOYEES: &str = "employees";
pub const CMD_PAYROLL: &str = "payroll";
pub const CMD_TIME_ENTRIES: &str = "time-entries";
pub const CMD_USERS: &str = "users";

pub const ARG_NUMBER: &str = "employee-number";
pub const ARG_ID: &str = "id";
pub const ARG_FILE: &str = "file";
pub const ARG_SEARCH: &str = "search";
pub const ARG_DEPARTMENT: &str = "department";
pub const ARG_STATUS: &str = "status";
pub const ARG_PERIOD: &str = "period";
pub const ARG_DATE: &str = "date";
pub const ARG_START: &str = "start";
pub const ARG_END: &str = "end";
pub const ARG_PAYMENT_DATE: &str = "payment-date";
pub const ARG_CLOCK_IN: &str = "clock-in";
pub const ARG_CLOCK_OUT: &str = "clock-out";
pub const ARG_NAME: &str = "name";
pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";

fn validator_date(value: &str) -> Result<String, String> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        });
    if well_formed {
        Ok(value.to_string())
    } else {
        Err(format!("expected YYYY-MM-DD, got {value}"))
    }
}

fn number_arg() -> Arg {
    Arg::new(ARG_NUMBER)
        .help("Employee number")
        .required(true)
}

fn id_arg() -> Arg {
    Arg::new(ARG_ID)
        .help("Record id")
        .required(true)
        .value_parser(clap::value_parser!(u64))
}

fn file_arg() -> Arg {
    Arg::new(ARG_FILE)
        .short('f')
        .long(ARG_FILE)
        .help("JSON file with the record fields (camelCase)")
        .required(true)
}

fn search_arg() -> Arg {
    Arg::new(ARG_SEARCH)
        .short('s')
        .long(ARG_SEARCH)
        .help("Case-insensitive search text")
}

#[must_use]
pub fn commands() -> Vec<Command> {
    vec![
        Command::new(CMD_DASHBOARD).about("Show headline counts and recent records"),
        employees(),
        payroll(),
        time_entries(),
        users(),
    ]
}

fn employees() -> Command {
    Command::new(CMD_EMPLOYEES)
        .about("Manage employee records")
        .subcommand_required(true)
        .subcommand(
            Command::new("list")
                .about("List employees")
                .arg(search_arg())
                .arg(
                    Arg::new(ARG_DEPARTMENT)
                        .long(ARG_DEPARTMENT)
                        .help("Only this department"),
                )
                .arg(
                    Arg::new(ARG_STATUS)
                        .long(ARG_STATUS)
                        .help("Only this employment status, e.g. Regular"),
                ),
        )
        .subcommand(Command::new("departments").about("List known departments"))
        .subcommand(Command::new("show").about("Show one employee").arg(number_arg()))
        .subcommand(Command::new("create").about("Create an employee").arg(file_arg()))
        .subcommand(
            Command::new("update")
                .about("Update an employee")
                .arg(number_arg())
                .arg(file_arg()),
        )
        .subcommand(Command::new("delete").about("Delete an employee").arg(number_arg()))
}

fn payroll() -> Command {
    Command::new(CMD_PAYROLL)
        .about("Manage payroll periods and entries")
        .subcommand_required(true)
        .subcommand(Command::new("periods").about("List payroll periods"))
        .subcommand(
            Command::new("create-period")
                .about("Create a payroll period")
                .arg(
                    Arg::new(ARG_START)
                        .long(ARG_START)
                        .help("Period start (YYYY-MM-DD)")
                        .required(true)
                        .value_parser(validator_date),
                )
                .arg(
                    Arg::new(ARG_END)
                        .long(ARG_END)
                        .help("Period end (YYYY-MM-DD)")
                        .required(true)
                        .value_parser(validator_date),
                )
                .arg(
                    Arg::new(ARG_PAYMENT_DATE)
                        .long(ARG_PAYMENT_DATE)
                        .help("Payment date (YYYY-MM-DD)")
                        .required(true)
                        .value_parser(validator_date),
                )
                .arg(
                    Arg::new(ARG_STATUS)
                        .long(ARG_STATUS)
                        .help("Initial status")
                        .default_value("pending"),
                ),
        )
        .subcommand(
            Command::new("entries")
                .about("List payroll entries")
                .arg(
                    Arg::new(ARG_PERIOD)
                        .long(ARG_PERIOD)
                        .help("Only entries of this period id")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new(ARG_NUMBER)
                        .long(ARG_NUMBER)
                        .help("Fetch the entries of one employee")
                        .conflicts_with(ARG_PERIOD),
                )
                .arg(search_arg()),
        )
        .subcommand(
            Command::new("calculate")
                .about("Compute the payroll of an employee for a period")
                .arg(number_arg())
                .arg(
                    Arg::new(ARG_PERIOD)
                        .help("Payroll period id")
                        .required(true)
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
}

fn time_entries() -> Command {
    Command::new(CMD_TIME_ENTRIES)
        .about("Manage time-attendance entries")
        .subcommand_required(true)
        .subcommand(
            Command::new("list")
                .about("List time entries")
                .arg(
                    Arg::new(ARG_DATE)
                        .long(ARG_DATE)
                        .help("Only entries clocked in on this day (YYYY-MM-DD)")
                        .value_parser(validator_date),
                )
                .arg(
                    Arg::new(ARG_NUMBER)
                        .long(ARG_NUMBER)
                        .help("Fetch the entries of one employee"),
                )
                .arg(search_arg()),
        )
        .subcommand(
            Command::new("create")
                .about("Record a time entry")
                .arg(
                    Arg::new(ARG_NUMBER)
                        .long(ARG_NUMBER)
                        .help("Employee number")
                        .required(true),
                )
                .arg(
                    Arg::new(ARG_CLOCK_IN)
                        .long(ARG_CLOCK_IN)
                        .help("Clock-in timestamp, e.g. 2024-03-01T08:00")
                        .required(true),
                )
                .arg(
                    Arg::new(ARG_CLOCK_OUT)
                        .long(ARG_CLOCK_OUT)
                        .help("Clock-out timestamp"),
                ),
        )
        .subcommand(Command::new("delete").about("Delete a time entry").arg(id_arg()))
}

fn users() -> Command {
    Command::new(CMD_USERS)
        .about("Manage console user accounts")
        .subcommand_required(true)
        .subcommand(Command::new("list").about("List user accounts"))
        .subcommand(
            Command::new("create")
                .about("Create a user account")
                .arg(Arg::new(ARG_NAME).long(ARG_NAME).help("Full name").required(true))
                .arg(Arg::new(ARG_EMAIL).long(ARG_EMAIL).help("Email").required(true))
                .arg(
                    Arg::new(ARG_PASSWORD)
                        .long(ARG_PASSWORD)
                        .help("Initial password")
                        .env("PAYDESK_USER_PASSWORD")
                        .hide_env_values(true)
                        .required(true),
                )
                .arg(
                    Arg::new(ARG_NUMBER)
                        .long(ARG_NUMBER)
                        .help("Linked employee number"),
                ),
        )
        .subcommand(Command::new("activate").about("Activate an account").arg(id_arg()))
        .subcommand(Command::new("deactivate").about("Deactivate an account").arg(id_arg()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validator_date() {
        assert!(validator_date("2024-03-01").is_ok());
        assert!(validator_date("2024-3-1").is_err());
        assert!(validator_date("2024/03/01").is_err());
        assert!(validator_date("").is_err());
    }
}

use clap::{Arg, ArgAction, Command};

pub const CMD_LOGIN: &str = "login";
pub const CMD_LOGOUT: &str = "logout";
pub const CMD_WHOAMI: &str = "whoami";
pub const CMD_CSRF: &str = "csrf";

pub const ARG_EMPLOYEE_NUMBER: &str = "employee-number";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_REFRESH: &str = "refresh";
pub const ARG_PROBE: &str = "probe";

#[must_use]
pub fn commands() -> Vec<Command> {
    vec![
        Command::new(CMD_LOGIN)
            .about("Sign in and keep the session cookie")
            .arg(
                Arg::new(ARG_EMPLOYEE_NUMBER)
                    .short('e')
                    .long(ARG_EMPLOYEE_NUMBER)
                    .help("Employee number, e.g. EMP001")
                    .env("PAYDESK_EMPLOYEE_NUMBER")
                    .required(true),
            )
            .arg(
                Arg::new(ARG_PASSWORD)
                    .long(ARG_PASSWORD)
                    .help("Account password")
                    .env("PAYDESK_PASSWORD")
                    .hide_env_values(true)
                    .required(true),
            ),
        Command::new(CMD_LOGOUT).about("End the backend session"),
        Command::new(CMD_WHOAMI).about("Check the session and show the signed-in user"),
        Command::new(CMD_CSRF)
            .about("Inspect the CSRF cookie handshake")
            .arg(
                Arg::new(ARG_REFRESH)
                    .long(ARG_REFRESH)
                    .help("Prime a fresh CSRF cookie first")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new(ARG_PROBE)
                    .long(ARG_PROBE)
                    .help("POST the backend test-csrf endpoint with the current token")
                    .action(ArgAction::SetTrue),
            ),
    ]
}

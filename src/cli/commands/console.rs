use crate::console::guard::{DEFAULT_LANDING_PATH, DEFAULT_LOGIN_PATH};
use clap::{Arg, Command};

pub const CMD_SERVE: &str = "serve";
pub const ARG_PORT: &str = "port";
pub const ARG_LOGIN_PATH: &str = "login-path";
pub const ARG_LANDING_PATH: &str = "landing-path";

fn validator_path(value: &str) -> Result<String, String> {
    if value.starts_with('/') {
        Ok(value.to_string())
    } else {
        Err(format!("path must start with '/': {value}"))
    }
}

#[must_use]
pub fn command() -> Command {
    Command::new(CMD_SERVE)
        .about("Serve the guarded web console")
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long(ARG_PORT)
                .help("Port to listen on")
                .default_value("8080")
                .env("PAYDESK_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new(ARG_LOGIN_PATH)
                .long(ARG_LOGIN_PATH)
                .help("Public login page")
                .default_value(DEFAULT_LOGIN_PATH)
                .value_parser(validator_path),
        )
        .arg(
            Arg::new(ARG_LANDING_PATH)
                .long(ARG_LANDING_PATH)
                .help("Page signed-in users land on")
                .default_value(DEFAULT_LANDING_PATH)
                .value_parser(validator_path),
        )
}

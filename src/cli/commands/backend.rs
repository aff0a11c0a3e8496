use crate::{
    api::config::{
        DEFAULT_API_BASE_URL, DEFAULT_COOKIE_SETTLE_MS, DEFAULT_SANCTUM_BASE_URL,
        DEFAULT_TIMEOUT_SECS, SESSION_COOKIE_NAME,
    },
    cli::globals::GlobalArgs,
    features::auth::RolePolicy,
};
use clap::{Arg, ArgMatches, Command};
use std::path::PathBuf;

pub const ARG_API_URL: &str = "api-url";
pub const ARG_SANCTUM_URL: &str = "sanctum-url";
pub const ARG_SESSION_FILE: &str = "session-file";
pub const ARG_SESSION_COOKIE: &str = "session-cookie";
pub const ARG_COOKIE_SETTLE_MS: &str = "cookie-settle-ms";
pub const ARG_TIMEOUT_SECS: &str = "timeout-secs";
pub const ARG_ROLE_POLICY: &str = "role-policy";

pub const DEFAULT_SESSION_FILE: &str = ".paydesk-session.json";

/// Parse backend arguments from matches.
///
/// # Errors
/// Returns an error if a required argument is missing or empty.
pub fn parse(matches: &ArgMatches) -> anyhow::Result<GlobalArgs> {
    let read_required = |id: &str| -> anyhow::Result<String> {
        matches
            .get_one::<String>(id)
            .cloned()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("missing required argument: --{id}"))
    };

    Ok(GlobalArgs {
        api_url: read_required(ARG_API_URL)?,
        sanctum_url: read_required(ARG_SANCTUM_URL)?,
        session_file: PathBuf::from(read_required(ARG_SESSION_FILE)?),
        session_cookie: read_required(ARG_SESSION_COOKIE)?,
        cookie_settle_ms: matches
            .get_one::<u64>(ARG_COOKIE_SETTLE_MS)
            .copied()
            .unwrap_or(DEFAULT_COOKIE_SETTLE_MS),
        timeout_secs: matches
            .get_one::<u64>(ARG_TIMEOUT_SECS)
            .copied()
            .unwrap_or(DEFAULT_TIMEOUT_SECS),
        role_policy: matches
            .get_one::<RolePolicy>(ARG_ROLE_POLICY)
            .copied()
            .unwrap_or_default(),
    })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_API_URL)
                .long(ARG_API_URL)
                .help("Backend API base URL")
                .env("PAYDESK_API_URL")
                .default_value(DEFAULT_API_BASE_URL)
                .global(true),
        )
        .arg(
            Arg::new(ARG_SANCTUM_URL)
                .long(ARG_SANCTUM_URL)
                .help("Base URL serving /sanctum/csrf-cookie")
                .env("PAYDESK_SANCTUM_URL")
                .default_value(DEFAULT_SANCTUM_BASE_URL)
                .global(true),
        )
        .arg(
            Arg::new(ARG_SESSION_FILE)
                .long(ARG_SESSION_FILE)
                .help("File keeping the backend cookies between runs")
                .env("PAYDESK_SESSION_FILE")
                .default_value(DEFAULT_SESSION_FILE)
                .global(true),
        )
        .arg(
            Arg::new(ARG_SESSION_COOKIE)
                .long(ARG_SESSION_COOKIE)
                .help("Name of the cookie marking a signed-in session")
                .env("PAYDESK_SESSION_COOKIE")
                .default_value(SESSION_COOKIE_NAME)
                .global(true),
        )
        .arg(
            Arg::new(ARG_COOKIE_SETTLE_MS)
                .long(ARG_COOKIE_SETTLE_MS)
                .help("Milliseconds to wait after priming the CSRF cookie before reading it")
                .env("PAYDESK_COOKIE_SETTLE_MS")
                .default_value("500")
                .global(true)
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new(ARG_TIMEOUT_SECS)
                .long(ARG_TIMEOUT_SECS)
                .help("Request timeout in seconds")
                .env("PAYDESK_TIMEOUT_SECS")
                .default_value("10")
                .global(true)
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .arg(
            Arg::new(ARG_ROLE_POLICY)
                .long(ARG_ROLE_POLICY)
                .help("How user roles are derived: uniform-admin or from-server")
                .env("PAYDESK_ROLE_POLICY")
                .default_value("uniform-admin")
                .global(true)
                .value_parser(|value: &str| value.parse::<RolePolicy>()),
        )
}

pub mod backend;
pub mod console;
pub mod resources;
pub mod session;

use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ArgAction, ColorChoice, Command,
};

pub const ARG_VERBOSITY: &str = "verbosity";

/// Level names accepted by `PAYDESK_LOG_LEVEL`, quietest first.
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Maps a level name or a count up to 5 onto the verbosity count.
fn log_level() -> ValueParser {
    ValueParser::from(|level: &str| -> Result<u8, String> {
        if let Ok(count) = level.parse::<u8>() {
            return (count <= 5)
                .then_some(count)
                .ok_or_else(|| format!("log level {count} is above 5"));
        }
        LOG_LEVELS
            .iter()
            .position(|name| name.eq_ignore_ascii_case(level))
            .and_then(|index| u8::try_from(index).ok())
            .ok_or_else(|| format!("unknown log level: {level}"))
    })
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("paydesk")
        .about("Payroll and HR administration console")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(console::command())
        .subcommands(session::commands())
        .subcommands(resources::commands());

    backend::with_args(command).arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
            .env("PAYDESK_LOG_LEVEL")
            .global(true)
            .action(ArgAction::Count)
            .value_parser(log_level()),
    )
}

use clap::{builder::ValueParser, Arg, ArgAction, Command};
use tracing::Level;

pub const ARG_VERBOSITY: &str = "verbosity";

/// Log levels by verbosity count. The CLI prints its results on stdout, so
/// only errors reach stderr unless asked for more.
const LEVELS: [(&str, Level); 5] = [
    ("error", Level::ERROR),
    ("warn", Level::WARN),
    ("info", Level::INFO),
    ("debug", Level::DEBUG),
    ("trace", Level::TRACE),
];

/// Level for a verbosity count; counts past the table saturate at TRACE.
#[must_use]
pub fn level(verbosity: u8) -> Level {
    LEVELS
        .get(usize::from(verbosity))
        .map_or(Level::TRACE, |(_, level)| *level)
}

/// Accepts a level name (`MEDINSTA_LOG_LEVEL=debug`) or its count (`3`).
#[must_use]
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |value: &str| -> std::result::Result<u8, String> {
        let value = value.trim().to_lowercase();
        if let Ok(count) = value.parse::<u8>() {
            if usize::from(count) < LEVELS.len() {
                return Ok(count);
            }
        }

        LEVELS
            .iter()
            .position(|(name, _)| *name == value)
            .and_then(|index| u8::try_from(index).ok())
            .ok_or_else(|| {
                format!("invalid log level: {value} (expected error, warn, info, debug or trace)")
            })
    })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Log more to stderr: -v warn, -vv info, -vvv debug, -vvvv trace")
            .long_help(
                "Log more to stderr: -v warn, -vv info, -vvv debug, -vvvv trace. \
                 Defaults to errors only; RUST_LOG overrides this setting.",
            )
            .env("MEDINSTA_LOG_LEVEL")
            .global(true)
            .action(ArgAction::Count)
            .value_parser(validator_log_level()),
    )
}

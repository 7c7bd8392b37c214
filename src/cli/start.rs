use crate::cli::{
    actions::Action,
    commands::{self, logging},
    dispatch::handler,
    telemetry::{self, LogFormat},
};
use anyhow::Result;

/// Start the CLI
/// # Errors
/// Returns an error if logging cannot be initialized or the arguments are incomplete.
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    let verbosity = matches
        .get_one::<u8>(logging::ARG_VERBOSITY)
        .copied()
        .unwrap_or(0);
    let format = matches
        .get_one::<String>(logging::ARG_LOG_FORMAT)
        .map_or(LogFormat::Text, |value| LogFormat::parse(value));

    telemetry::init(Some(telemetry::level_from_verbosity(verbosity)), format)?;

    handler(&matches)
}

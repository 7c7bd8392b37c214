pub mod auth;
pub mod logging;
pub mod projects;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const ARG_API_URL: &str = "api-url";
pub const ARG_SESSION_DIR: &str = "session-dir";
pub const ARG_TIMEOUT: &str = "timeout";

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

    let command = Command::new("devconnect")
        .about("DevConnect project tracker client")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_API_URL)
                .short('u')
                .long("api-url")
                .help("DevConnect API base URL")
                .default_value(crate::config::DEFAULT_API_URL)
                .env("DEVCONNECT_API_URL")
                .global(true),
        )
        .arg(
            Arg::new(ARG_SESSION_DIR)
                .long("session-dir")
                .help("Directory holding the session file (default: $HOME/.devconnect)")
                .env("DEVCONNECT_SESSION_DIR")
                .global(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .long("timeout")
                .help("Request timeout in seconds")
                .default_value("10")
                .env("DEVCONNECT_TIMEOUT")
                .global(true)
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .subcommand(auth::register())
        .subcommand(auth::login())
        .subcommand(auth::logout())
        .subcommand(auth::status())
        .subcommand(auth::open())
        .subcommand(projects::new());

    logging::with_args(command)
}

use clap::{Arg, Command};

pub const ARG_NAME: &str = "name";
pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";

fn password_arg() -> Arg {
    Arg::new(ARG_PASSWORD)
        .long("password")
        .help("Account password")
        .env("DEVCONNECT_PASSWORD")
        .hide_env_values(true)
        .required(true)
}

fn email_arg() -> Arg {
    Arg::new(ARG_EMAIL)
        .short('e')
        .long("email")
        .help("Account email")
        .env("DEVCONNECT_EMAIL")
        .required(true)
}

#[must_use]
pub fn register() -> Command {
    Command::new("register")
        .about("Create a DevConnect account")
        .arg(
            Arg::new(ARG_NAME)
                .short('n')
                .long("name")
                .help("Display name")
                .required(true),
        )
        .arg(email_arg())
        .arg(password_arg())
}

#[must_use]
pub fn login() -> Command {
    Command::new("login")
        .about("Log in and store the session token")
        .arg(email_arg())
        .arg(password_arg())
}

#[must_use]
pub fn logout() -> Command {
    Command::new("logout").about("Erase the stored session token")
}

#[must_use]
pub fn status() -> Command {
    Command::new("status").about("Show the session state and whether the dashboard is reachable")
}

#[must_use]
pub fn open() -> Command {
    Command::new("open")
        .about("Navigate to a route (/login, /register, /dashboard)")
        .arg(
            Arg::new("path")
                .help("Route path")
                .default_value("/dashboard"),
        )
}

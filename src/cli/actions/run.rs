use crate::cli::actions::{auth, projects, status, Action};
use anyhow::Result;

/// Runs the action and returns what it prints.
/// # Errors
/// Returns an error if the action fails.
pub async fn output(action: Action) -> Result<String> {
    match action {
        Action::Register(args) => auth::register(args).await,
        Action::Login(args) => auth::login(args).await,
        Action::Logout(globals) => auth::logout(&globals),
        Action::Status(globals) => status::status(&globals),
        Action::Open(args) => status::open(&args),
        Action::Projects(args) => projects::run(args).await,
    }
}

/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    let output = output(action).await?;
    println!("{output}");
    Ok(())
}

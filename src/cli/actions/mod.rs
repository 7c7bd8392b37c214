pub mod auth;
pub mod projects;
pub mod status;

// The match over every variant lives in `run` so this module stays small.
mod run;

use crate::cli::globals::GlobalArgs;

#[derive(Debug)]
pub enum Action {
    Register(auth::RegisterArgs),
    Login(auth::LoginArgs),
    Logout(GlobalArgs),
    Status(GlobalArgs),
    Open(status::OpenArgs),
    Projects(projects::Args),
}

impl Action {
    /// Execute the action and print its output.
    /// # Errors
    /// Returns an error if the action fails; the message is meant for the user.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }

    /// Run the action and return what `execute` would print.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn output(self) -> anyhow::Result<String> {
        run::output(self).await
    }
}

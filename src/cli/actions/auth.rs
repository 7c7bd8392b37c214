use crate::{
    cli::globals::GlobalArgs,
    forms::{LoginForm, RegisterForm},
    guard::Route,
};
use anyhow::{bail, Result};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

#[derive(Debug)]
pub struct RegisterArgs {
    pub globals: GlobalArgs,
    pub name: String,
    pub email: String,
    pub password: SecretString,
}

#[derive(Debug)]
pub struct LoginArgs {
    pub globals: GlobalArgs,
    pub email: String,
    pub password: SecretString,
}

/// Creates the account; the user is sent to the login view afterwards.
/// # Errors
/// Returns the server message (or the generic fallback) when registration fails.
pub async fn register(args: RegisterArgs) -> Result<String> {
    let form = RegisterForm::new(&args.name, &args.email, args.password.expose_secret())?;
    let client = args.globals.client()?;

    if let Err(err) = client.register(&form).await {
        debug!("registration failed: {err}");
        bail!("{}", err.user_message());
    }

    Ok(format!(
        "Registered successfully!\nContinue at {}: devconnect login --email {}",
        Route::Login,
        form.email
    ))
}

/// Logs in and persists the token.
/// # Errors
/// Returns the server message (or the generic fallback) when login fails.
pub async fn login(args: LoginArgs) -> Result<String> {
    let form = LoginForm::new(&args.email, args.password.expose_secret())?;
    let client = args.globals.client()?;

    match client.login(&form).await {
        Ok(state) => {
            debug!("session is now {state}");
            Ok(format!("Login successful!\nContinue at {}", Route::Dashboard))
        }
        Err(err) => {
            debug!("login failed: {err}");
            bail!("{}", err.user_message());
        }
    }
}

/// Erases the stored token without contacting the server.
/// # Errors
/// Returns an error if the session file cannot be updated.
pub fn logout(globals: &GlobalArgs) -> Result<String> {
    let client = globals.client()?;
    let state = client.logout()?;
    debug!("session is now {state}");
    Ok(format!("Logged out.\nContinue at {}", Route::Login))
}

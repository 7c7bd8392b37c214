use crate::{
    cli::globals::GlobalArgs,
    guard::{self, Decision, Route},
};
use anyhow::Result;

#[derive(Debug)]
pub struct OpenArgs {
    pub globals: GlobalArgs,
    pub path: String,
}

/// Reports the session state and what the guard decides for the dashboard.
/// # Errors
/// Returns an error if the configuration is invalid.
pub fn status(globals: &GlobalArgs) -> Result<String> {
    let config = globals.config()?;
    let session = GlobalArgs::session(&config);

    let decision = match guard::evaluate(&session) {
        Decision::Admit => format!("{} is available", Route::Dashboard),
        Decision::Redirect(route) => format!("{} redirects to {route}", Route::Dashboard),
    };

    Ok(format!(
        "Session: {}\nAPI: {}\n{decision}",
        session.state(),
        config.api_base_url
    ))
}

/// Resolves a navigation path to the view that would render.
/// # Errors
/// Returns an error if the configuration is invalid.
pub fn open(args: &OpenArgs) -> Result<String> {
    let config = args.globals.config()?;
    let session = GlobalArgs::session(&config);

    let route = guard::resolve(&args.path, &session);
    let requested = Route::from_path(&args.path);

    Ok(match route {
        Route::NotFound => "404: Page Not Found".to_string(),
        route if route != requested => format!("{requested} redirects to {route}"),
        route => format!("Rendering {route}"),
    })
}

//! Route guard and route table.
//!
//! The guard is UX-only: it decides whether to show the dashboard from the
//! presence of a session token and nothing else. Real access control lives on
//! the API, which rejects requests carrying a bad or expired token.

use crate::session::SessionContext;
use secrecy::ExposeSecret;
use std::fmt;

/// Views the client can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Dashboard,
    NotFound,
}

impl Route {
    /// Matches a navigation path against the route table.
    /// Matching ignores case, surrounding whitespace and a trailing slash.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };

        match normalized.to_ascii_lowercase().as_str() {
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/dashboard" => Route::Dashboard,
            _ => Route::NotFound,
        }
    }

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Dashboard => "/dashboard",
            Route::NotFound => "*",
        }
    }

    /// Whether navigating here must pass the guard.
    #[must_use]
    pub const fn is_protected(self) -> bool {
        matches!(self, Route::Dashboard)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.path())
    }
}

/// Outcome of a guarded navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Admit,
    Redirect(Route),
}

/// Pure decision rule: admit iff a non-empty token is present.
#[must_use]
pub fn decide(token: Option<&str>) -> Decision {
    match token {
        Some(token) if !token.is_empty() => Decision::Admit,
        _ => Decision::Redirect(Route::Login),
    }
}

/// Evaluates the guard against the session at navigation time.
/// The token is not validated against the server.
#[must_use]
pub fn evaluate(session: &SessionContext) -> Decision {
    let token = session.token();
    decide(token.as_ref().map(|token| token.expose_secret()))
}

/// Resolves a navigation path to the view that will actually render,
/// applying the guard to protected routes only.
#[must_use]
pub fn resolve(path: &str, session: &SessionContext) -> Route {
    let route = Route::from_path(path);
    if !route.is_protected() {
        return route;
    }

    match evaluate(session) {
        Decision::Admit => route,
        Decision::Redirect(target) => target,
    }
}

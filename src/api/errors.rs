use std::fmt;

/// Generic message shown when a failure carries no server-provided text.
pub const GENERIC_FAILURE: &str = "Error";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    Config(String),
    Network(String),
    Timeout(String),
    /// The server answered with an error and a `msg` for the user.
    Rejected { status: u16, message: String },
    Http { status: u16, message: String },
    Parse(String),
    Serialization(String),
    Session(String),
}

impl ApiError {
    /// Text suitable for a blocking acknowledgment after an auth failure:
    /// the server message when one was sent, otherwise the generic fallback.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            ApiError::Rejected { message, .. } => message,
            _ => GENERIC_FAILURE,
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } | ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Config(message) => write!(formatter, "Config error: {message}"),
            ApiError::Network(message) => write!(formatter, "Network error: {message}"),
            ApiError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            ApiError::Rejected { status, message } | ApiError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            ApiError::Parse(message) => write!(formatter, "Response error: {message}"),
            ApiError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
            ApiError::Session(message) => write!(formatter, "Session error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<crate::session::SessionError> for ApiError {
    fn from(err: crate::session::SessionError) -> Self {
        ApiError::Session(err.to_string())
    }
}

//! Typed form records. Field constraints are enforced when a record is built,
//! so anything that reaches the API client has already been validated.

use crate::projects::Project;
use chrono::NaiveDate;
use secrecy::SecretString;
use serde::{Serialize, Serializer};
use std::fmt;

/// Format of date-only values exchanged with the user.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    Required(&'static str),
    InvalidDate(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::Required(field) => write!(formatter, "{field} is required."),
            FormError::InvalidDate(value) => {
                write!(formatter, "Invalid date `{value}`, expected YYYY-MM-DD.")
            }
        }
    }
}

impl std::error::Error for FormError {}

/// Rejects blank input; the value itself is kept as typed.
fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    if value.trim().is_empty() {
        Err(FormError::Required(field))
    } else {
        Ok(value.to_string())
    }
}

#[derive(Debug)]
pub struct LoginForm {
    pub email: String,
    pub password: SecretString,
}

impl LoginForm {
    /// # Errors
    /// Returns an error if the email or password is empty.
    pub fn new(email: &str, password: &str) -> Result<Self, FormError> {
        let email = required(email, "Email")?;
        if password.trim().is_empty() {
            return Err(FormError::Required("Password"));
        }

        Ok(Self {
            email,
            password: SecretString::from(password.to_string()),
        })
    }
}

#[derive(Debug)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: SecretString,
}

impl RegisterForm {
    /// The address format is left to the API.
    ///
    /// # Errors
    /// Returns an error if a field is empty.
    pub fn new(name: &str, email: &str, password: &str) -> Result<Self, FormError> {
        let name = required(name, "Name")?;
        let email = required(email, "Email")?;
        if password.trim().is_empty() {
            return Err(FormError::Required("Password"));
        }

        Ok(Self {
            name,
            email,
            password: SecretString::from(password.to_string()),
        })
    }
}

/// Validated project payload sent on create and update. Text fields go out
/// as typed; a missing deadline is sent as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub status: String,
    #[serde(serialize_with = "deadline_or_blank")]
    pub deadline: Option<NaiveDate>,
}

fn deadline_or_blank<S: Serializer>(
    deadline: &Option<NaiveDate>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match deadline {
        Some(date) => serializer.collect_str(&date.format(DATE_FORMAT)),
        None => serializer.serialize_str(""),
    }
}

impl ProjectDraft {
    /// # Errors
    /// Returns an error if the title or description is empty.
    pub fn new(
        title: &str,
        description: &str,
        tags: Vec<String>,
        status: &str,
        deadline: Option<NaiveDate>,
    ) -> Result<Self, FormError> {
        Ok(Self {
            title: required(title, "Title")?,
            description: required(description, "Description")?,
            tags,
            status: status.to_string(),
            deadline,
        })
    }
}

/// Raw project form fields as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    /// Comma-separated tag list.
    pub tags: String,
    pub status: String,
    /// `YYYY-MM-DD` or empty.
    pub deadline: String,
}

impl ProjectForm {
    /// Pre-populates the form from a stored project for editing.
    #[must_use]
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            tags: project.tags.join(", "),
            status: project.status.clone().unwrap_or_default(),
            deadline: project
                .deadline_date()
                .map(|date| date.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
        }
    }

    /// # Errors
    /// Returns an error if a required field is empty or the deadline is not a date.
    pub fn to_draft(&self) -> Result<ProjectDraft, FormError> {
        let deadline = parse_optional_date(&self.deadline)?;
        ProjectDraft::new(
            &self.title,
            &self.description,
            split_tags(&self.tags),
            &self.status,
            deadline,
        )
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Splits a comma-separated tag list and trims each tag. Empty entries are
/// kept, so blank input yields a single empty tag.
#[must_use]
pub fn split_tags(input: &str) -> Vec<String> {
    input.split(',').map(|tag| tag.trim().to_string()).collect()
}

/// Parses a `YYYY-MM-DD` value; blank input means no date.
///
/// # Errors
/// Returns an error if the value is not blank and not a valid date.
pub fn parse_optional_date(value: &str) -> Result<Option<NaiveDate>, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(Some)
        .map_err(|_| FormError::InvalidDate(trimmed.to_string()))
}

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A project as returned by `GET /projects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Date or full timestamp; only the leading `YYYY-MM-DD` is meaningful.
    #[serde(default)]
    pub deadline: Option<String>,
}

impl Project {
    /// Date portion of the deadline, if present and well formed.
    #[must_use]
    pub fn deadline_date(&self) -> Option<NaiveDate> {
        let deadline = self.deadline.as_deref()?.trim();
        let date = deadline.get(..10).unwrap_or(deadline);
        NaiveDate::parse_from_str(date, crate::forms::DATE_FORMAT).ok()
    }

    /// Status for display; blank or missing shows as `N/A`.
    #[must_use]
    pub fn status_label(&self) -> &str {
        match self.status.as_deref() {
            Some(status) if !status.is_empty() => status,
            _ => "N/A",
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

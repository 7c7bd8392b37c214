//! Project collection: wire types, view filters, the dashboard state that
//! reconciles with the server after every mutation, and plain-text rendering.

mod dashboard;
mod filter;
pub mod render;
mod types;

pub use self::dashboard::{Dashboard, DashboardError, Submission};
pub use self::filter::ProjectFilter;
pub use self::types::Project;

use crate::{api::ApiError, forms::ProjectDraft};
use std::future::Future;

/// Status values offered by the status filter. Any other free-text status is
/// still accepted by the server and matched by equality.
pub const SUGGESTED_STATUSES: [&str; 3] = ["In Progress", "Completed", "Pending"];

/// Project CRUD operations against the server.
pub trait ProjectService {
    fn list_projects(&self) -> impl Future<Output = Result<Vec<Project>, ApiError>> + Send;

    fn create_project(
        &self,
        draft: &ProjectDraft,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn update_project(
        &self,
        id: &str,
        draft: &ProjectDraft,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn delete_project(&self, id: &str) -> impl Future<Output = Result<(), ApiError>> + Send;
}

//! Dashboard state: the fetched project list, the project form, the edit
//! target and the view filter.
//!
//! Mutations are never applied locally. A successful create, update or delete
//! is followed by a reconciliation fetch that replaces the list wholesale; a
//! failed fetch or mutation is logged and leaves the list untouched. Between a
//! mutation and its reconciliation the list is stale.

use super::{Project, ProjectFilter, ProjectService};
use crate::{
    api::ApiError,
    forms::{FormError, ProjectForm},
};
use std::fmt;
use tracing::{debug, error, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    Form(FormError),
    Api(ApiError),
}

impl fmt::Display for DashboardError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashboardError::Form(err) => write!(formatter, "{err}"),
            DashboardError::Api(err) => write!(formatter, "{err}"),
        }
    }
}

impl std::error::Error for DashboardError {}

impl From<FormError> for DashboardError {
    fn from(err: FormError) -> Self {
        DashboardError::Form(err)
    }
}

impl From<ApiError> for DashboardError {
    fn from(err: ApiError) -> Self {
        DashboardError::Api(err)
    }
}

/// What a successful submit did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Created,
    Updated(String),
}

#[derive(Debug)]
pub struct Dashboard<S> {
    service: S,
    projects: Vec<Project>,
    form: ProjectForm,
    editing: Option<String>,
    filter: ProjectFilter,
}

impl<S: ProjectService> Dashboard<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            projects: Vec::new(),
            form: ProjectForm::default(),
            editing: None,
            filter: ProjectFilter::default(),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Last fetched collection, unfiltered.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Projects passing the current filter.
    pub fn visible(&self) -> Vec<&Project> {
        self.filter.apply(&self.projects)
    }

    pub fn form(&self) -> &ProjectForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProjectForm {
        &mut self.form
    }

    /// Id of the project being edited, if any.
    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    pub fn filter(&self) -> &ProjectFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: ProjectFilter) {
        self.filter = filter;
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
    }

    /// Re-reads the full collection and replaces the local copy.
    /// On failure the error is logged and the previous copy is kept.
    ///
    /// # Errors
    /// Returns the fetch error after logging it.
    pub async fn reconcile(&mut self) -> Result<(), ApiError> {
        match self.service.list_projects().await {
            Ok(projects) => {
                debug!("fetched {} projects", projects.len());
                self.projects = projects;
                Ok(())
            }
            Err(err) => {
                error!("Failed to fetch projects: {err}");
                Err(err)
            }
        }
    }

    /// Switches the form to edit mode for `project`.
    pub fn begin_edit(&mut self, project: &Project) {
        self.editing = Some(project.id.clone());
        self.form = ProjectForm::from_project(project);
    }

    /// Leaves edit mode and clears the form.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.form.clear();
    }

    /// Submits the form: update when editing, create otherwise. On success the
    /// form and edit target are cleared and the list is reconciled; on failure
    /// both are kept so the user can retry by hand.
    ///
    /// # Errors
    /// Returns a form error before any request is made, or the mutation error.
    pub async fn submit(&mut self) -> Result<Submission, DashboardError> {
        let draft = self.form.to_draft()?;

        let submission = match self.editing.clone() {
            Some(id) => {
                if let Err(err) = self.service.update_project(&id, &draft).await {
                    error!("Failed to update project {id}: {err}");
                    return Err(err.into());
                }
                info!("updated project {id}");
                Submission::Updated(id)
            }
            None => {
                if let Err(err) = self.service.create_project(&draft).await {
                    error!("Failed to create project: {err}");
                    return Err(err.into());
                }
                info!("created project");
                Submission::Created
            }
        };

        self.editing = None;
        self.form.clear();
        // A failed reconciliation is already logged and keeps the stale list.
        let _ = self.reconcile().await;

        Ok(submission)
    }

    /// Deletes a project and reconciles.
    ///
    /// # Errors
    /// Returns the delete error after logging it; the list is left untouched.
    pub async fn delete(&mut self, id: &str) -> Result<(), ApiError> {
        if let Err(err) = self.service.delete_project(id).await {
            error!("Failed to delete project {id}: {err}");
            return Err(err);
        }
        info!("deleted project {id}");

        let _ = self.reconcile().await;
        Ok(())
    }
}

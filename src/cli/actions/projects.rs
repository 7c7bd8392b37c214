use crate::{
    api::ApiClient,
    cli::globals::GlobalArgs,
    forms::parse_optional_date,
    guard::{self, Decision},
    projects::{render, Dashboard, ProjectFilter, ProjectService, Submission},
};
use anyhow::{anyhow, bail, Context, Result};
use tracing::debug;

/// Field values given on the command line; `None` keeps the form value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub status: Option<String>,
    pub deadline: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List {
        status: Option<String>,
        deadline: Option<String>,
        json: bool,
    },
    Create(Fields),
    Edit {
        id: String,
        fields: Fields,
    },
    Delete {
        id: String,
    },
}

#[derive(Debug)]
pub struct Args {
    pub globals: GlobalArgs,
    pub command: Command,
}

/// Runs a dashboard command behind the route guard.
/// # Errors
/// Returns an error when the guard redirects, the input is invalid or a request fails.
pub async fn run(args: Args) -> Result<String> {
    let client = args.globals.client()?;

    if let Decision::Redirect(route) = guard::evaluate(client.session()) {
        bail!("Not logged in, redirected to {route}. Run `devconnect login` first.");
    }

    let mut dashboard = Dashboard::new(client);
    apply(&mut dashboard, args.command).await
}

async fn apply(dashboard: &mut Dashboard<ApiClient>, command: Command) -> Result<String> {
    match command {
        Command::List {
            status,
            deadline,
            json,
        } => {
            let deadline = parse_optional_date(deadline.as_deref().unwrap_or_default())?;
            dashboard.set_filter(ProjectFilter::new(status.as_deref(), deadline));
            dashboard
                .reconcile()
                .await
                .context("Failed to fetch projects")?;

            if json {
                serde_json::to_string_pretty(&dashboard.visible())
                    .context("Failed to encode projects")
            } else {
                Ok(view(dashboard))
            }
        }
        Command::Create(fields) => {
            fill(dashboard, fields);
            let submission = dashboard
                .submit()
                .await
                .context("Failed to create project")?;
            Ok(format!("{}\n\n{}", confirmation(&submission), view(dashboard)))
        }
        Command::Edit { id, fields } => {
            dashboard
                .reconcile()
                .await
                .context("Failed to fetch projects")?;
            let project = dashboard
                .project(&id)
                .cloned()
                .ok_or_else(|| anyhow!("Project {id} not found"))?;

            dashboard.begin_edit(&project);
            fill(dashboard, fields);
            let submission = dashboard
                .submit()
                .await
                .context("Failed to update project")?;
            Ok(format!("{}\n\n{}", confirmation(&submission), view(dashboard)))
        }
        Command::Delete { id } => {
            dashboard
                .delete(&id)
                .await
                .with_context(|| format!("Failed to delete project {id}"))?;
            Ok(format!("Project {id} deleted.\n\n{}", view(dashboard)))
        }
    }
}

fn fill<S: ProjectService>(dashboard: &mut Dashboard<S>, fields: Fields) {
    let form = dashboard.form_mut();
    let slots = [
        (&mut form.title, fields.title),
        (&mut form.description, fields.description),
        (&mut form.tags, fields.tags),
        (&mut form.status, fields.status),
        (&mut form.deadline, fields.deadline),
    ];

    for (slot, value) in slots {
        if let Some(value) = value {
            *slot = value;
        }
    }
    debug!("project form: {:?}", dashboard.form());
}

fn confirmation(submission: &Submission) -> String {
    match submission {
        Submission::Created => "Project created.".to_string(),
        Submission::Updated(id) => format!("Project {id} updated."),
    }
}

fn view<S: ProjectService>(dashboard: &Dashboard<S>) -> String {
    let visible = dashboard.visible();
    format!(
        "{}\n\n{}",
        render::header(visible.len(), dashboard.projects().len()),
        render::project_list(&visible)
    )
}

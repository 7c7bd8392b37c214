use crate::cli::{
    actions::{
        auth::{LoginArgs, RegisterArgs},
        projects::{self, Fields},
        status::OpenArgs,
        Action,
    },
    commands::{self, auth as auth_args, projects as project_args},
    globals::GlobalArgs,
};
use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use secrecy::SecretString;
use std::path::PathBuf;

fn required(matches: &ArgMatches, name: &str) -> Result<String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .with_context(|| format!("missing required argument: --{name}"))
}

fn globals(matches: &ArgMatches) -> Result<GlobalArgs> {
    Ok(GlobalArgs {
        api_url: required(matches, commands::ARG_API_URL)?,
        session_dir: matches
            .get_one::<String>(commands::ARG_SESSION_DIR)
            .map(PathBuf::from),
        timeout: matches
            .get_one::<u64>(commands::ARG_TIMEOUT)
            .copied()
            .unwrap_or(crate::config::DEFAULT_TIMEOUT_SECS),
    })
}

fn fields(matches: &ArgMatches) -> Fields {
    let get = |name: &str| matches.get_one::<String>(name).cloned();
    Fields {
        title: get(project_args::ARG_TITLE),
        description: get(project_args::ARG_DESCRIPTION),
        tags: get(project_args::ARG_TAGS),
        status: get(project_args::ARG_STATUS),
        deadline: get(project_args::ARG_DEADLINE),
    }
}

fn projects_command(matches: &ArgMatches) -> Result<projects::Command> {
    let command = match matches.subcommand() {
        Some(("list", sub_m)) => projects::Command::List {
            status: sub_m.get_one::<String>(project_args::ARG_STATUS).cloned(),
            deadline: sub_m.get_one::<String>(project_args::ARG_DEADLINE).cloned(),
            json: sub_m.get_flag("json"),
        },
        Some(("create", sub_m)) => projects::Command::Create(fields(sub_m)),
        Some(("edit", sub_m)) => projects::Command::Edit {
            id: required(sub_m, project_args::ARG_ID)?,
            fields: fields(sub_m),
        },
        Some(("delete", sub_m)) => projects::Command::Delete {
            id: required(sub_m, project_args::ARG_ID)?,
        },
        _ => return Err(anyhow!("unknown projects subcommand")),
    };

    Ok(command)
}

/// Maps parsed arguments to the action to run.
/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let globals = globals(matches)?;

    let action = match matches.subcommand() {
        Some(("register", sub_m)) => Action::Register(RegisterArgs {
            globals,
            name: required(sub_m, auth_args::ARG_NAME)?,
            email: required(sub_m, auth_args::ARG_EMAIL)?,
            password: SecretString::from(required(sub_m, auth_args::ARG_PASSWORD)?),
        }),
        Some(("login", sub_m)) => Action::Login(LoginArgs {
            globals,
            email: required(sub_m, auth_args::ARG_EMAIL)?,
            password: SecretString::from(required(sub_m, auth_args::ARG_PASSWORD)?),
        }),
        Some(("logout", _)) => Action::Logout(globals),
        Some(("status", _)) => Action::Status(globals),
        Some(("open", sub_m)) => Action::Open(OpenArgs {
            globals,
            path: required(sub_m, "path")?,
        }),
        Some(("projects", sub_m)) => Action::Projects(projects::Args {
            globals,
            command: projects_command(sub_m)?,
        }),
        _ => return Err(anyhow!("unknown subcommand")),
    };

    Ok(action)
}

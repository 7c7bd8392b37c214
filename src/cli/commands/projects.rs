use clap::{Arg, ArgAction, Command};

pub const ARG_ID: &str = "id";
pub const ARG_TITLE: &str = "title";
pub const ARG_DESCRIPTION: &str = "description";
pub const ARG_TAGS: &str = "tags";
pub const ARG_STATUS: &str = "status";
pub const ARG_DEADLINE: &str = "deadline";

fn field_args(command: Command, required: bool) -> Command {
    command
        .arg(
            Arg::new(ARG_TITLE)
                .short('t')
                .long("title")
                .help("Project title")
                .required(required),
        )
        .arg(
            Arg::new(ARG_DESCRIPTION)
                .short('d')
                .long("description")
                .help("Project description")
                .required(required),
        )
        .arg(
            Arg::new(ARG_TAGS)
                .long("tags")
                .help("Comma-separated tags, e.g. \"rust, cli\""),
        )
        .arg(
            Arg::new(ARG_STATUS)
                .short('s')
                .long("status")
                .help("Status, e.g. In Progress, Completed, Pending"),
        )
        .arg(
            Arg::new(ARG_DEADLINE)
                .long("deadline")
                .help("Deadline as YYYY-MM-DD"),
        )
}

fn id_arg() -> Arg {
    Arg::new(ARG_ID).help("Project id").required(true)
}

#[must_use]
pub fn new() -> Command {
    Command::new("projects")
        .about("Manage projects on the dashboard")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("List projects, optionally filtered")
                .arg(
                    Arg::new(ARG_STATUS)
                        .short('s')
                        .long("status")
                        .help("Show only projects with this exact status"),
                )
                .arg(
                    Arg::new(ARG_DEADLINE)
                        .long("deadline")
                        .help("Show only projects due on this date (YYYY-MM-DD)"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the visible projects as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(field_args(
            Command::new("create").about("Create a project"),
            true,
        ))
        .subcommand(field_args(
            Command::new("edit")
                .about("Edit a project; omitted fields keep their stored values")
                .arg(id_arg()),
            false,
        ))
        .subcommand(
            Command::new("delete")
                .about("Delete a project")
                .arg(id_arg()),
        )
}

use crate::cli::actions::users::UserOp;
use crate::features::users::{CreateUserCommand, ListParams, UpdateUserCommand};
use anyhow::{Context, Result, anyhow};
use clap::{Arg, Command};

pub const CMD_USERS: &str = "users";

fn id_arg() -> Arg {
    Arg::new("id")
        .help("Server-assigned user id")
        .required(true)
        .value_parser(clap::value_parser!(i64))
}

#[must_use]
pub fn subcommand() -> Command {
    Command::new(CMD_USERS)
        .about("Manage users through the REST API")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("List users")
                .arg(
                    Arg::new("skip")
                        .long("skip")
                        .help("Number of users to skip")
                        .default_value("0")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .help("Maximum number of users to return")
                        .default_value("100")
                        .value_parser(clap::value_parser!(u32)),
                ),
        )
        .subcommand(Command::new("get").about("Show a user").arg(id_arg()))
        .subcommand(
            Command::new("create")
                .about("Create a user")
                .arg(Arg::new("email").long("email").required(true))
                .arg(Arg::new("username").long("username").required(true))
                .arg(Arg::new("full-name").long("full-name").required(true)),
        )
        .subcommand(
            Command::new("update")
                .about("Update a user's full name")
                .arg(id_arg())
                .arg(Arg::new("full-name").long("full-name")),
        )
        .subcommand(
            Command::new("deactivate")
                .about("Deactivate a user")
                .arg(id_arg()),
        )
}

fn required(matches: &clap::ArgMatches, name: &str) -> Result<String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .with_context(|| format!("missing required argument: --{name}"))
}

fn id(matches: &clap::ArgMatches) -> Result<i64> {
    matches
        .get_one::<i64>("id")
        .copied()
        .context("missing required argument: <id>")
}

/// Map `users <op>` matches to a user operation.
///
/// # Errors
/// Returns an error if the subcommand or a required argument is missing.
pub fn parse(matches: &clap::ArgMatches) -> Result<UserOp> {
    match matches.subcommand() {
        Some(("list", sub_m)) => Ok(UserOp::List(ListParams::new(
            sub_m
                .get_one::<u32>("skip")
                .copied()
                .unwrap_or(ListParams::DEFAULT_SKIP),
            sub_m
                .get_one::<u32>("limit")
                .copied()
                .unwrap_or(ListParams::DEFAULT_LIMIT),
        ))),
        Some(("get", sub_m)) => Ok(UserOp::Get { id: id(sub_m)? }),
        Some(("create", sub_m)) => Ok(UserOp::Create(CreateUserCommand {
            email: required(sub_m, "email")?,
            username: required(sub_m, "username")?,
            full_name: required(sub_m, "full-name")?,
        })),
        Some(("update", sub_m)) => Ok(UserOp::Update {
            id: id(sub_m)?,
            command: UpdateUserCommand {
                full_name: sub_m.get_one::<String>("full-name").cloned(),
            },
        }),
        Some(("deactivate", sub_m)) => Ok(UserOp::Deactivate { id: id(sub_m)? }),
        Some((other, _)) => Err(anyhow!("unknown users subcommand: {other}")),
        None => Err(anyhow!("missing users subcommand")),
    }
}

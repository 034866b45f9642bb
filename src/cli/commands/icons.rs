use crate::cli::actions::icons::IconOp;
use anyhow::{Context, Result, anyhow};
use clap::{Arg, Command};

pub const CMD_ICONS: &str = "icons";

#[must_use]
pub fn subcommand() -> Command {
    Command::new(CMD_ICONS)
        .about("Inspect the built-in SVG icons")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("list").about("List registered icon names"))
        .subcommand(
            Command::new("show")
                .about("Print the SVG markup of an icon")
                .arg(Arg::new("name").help("Icon name").required(true)),
        )
}

/// Map `icons <op>` matches to an icon operation.
///
/// # Errors
/// Returns an error if the subcommand or icon name is missing.
pub fn parse(matches: &clap::ArgMatches) -> Result<IconOp> {
    match matches.subcommand() {
        Some(("list", _)) => Ok(IconOp::List),
        Some(("show", sub_m)) => Ok(IconOp::Show {
            name: sub_m
                .get_one::<String>("name")
                .cloned()
                .context("missing required argument: <name>")?,
        }),
        Some((other, _)) => Err(anyhow!("unknown icons subcommand: {other}")),
        None => Err(anyhow!("missing icons subcommand")),
    }
}

//! Command-line argument dispatch.
//!
//! Maps validated CLI matches to the action the binary executes: a user API
//! operation (with its API configuration) or an icon lookup.

use crate::cli::actions::Action;
use crate::cli::commands::{api, icons, users};
use anyhow::{Result, anyhow};

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some((users::CMD_USERS, sub_m)) => Ok(Action::Users {
            config: api::parse(matches)?,
            op: users::parse(sub_m)?,
        }),
        Some((icons::CMD_ICONS, sub_m)) => Ok(Action::Icons(icons::parse(sub_m)?)),
        Some((other, _)) => Err(anyhow!("unknown command: {other}")),
        None => Err(anyhow!("missing command")),
    }
}

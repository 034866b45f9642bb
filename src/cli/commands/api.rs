use crate::api::{ApiConfig, config::DEFAULT_API_BASE_URL};
use anyhow::{Context, Result};
use clap::{Arg, Command};

pub const ARG_API_URL: &str = "api-url";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_API_URL)
            .short('u')
            .long("api-url")
            .help("Base URL of the user API, example: https://api.userdesk.dev/api/v1")
            .env("USERDESK_API_URL")
            .default_value(DEFAULT_API_BASE_URL)
            .global(true),
    )
}

/// Build the API configuration from the global `--api-url` argument.
///
/// # Errors
/// Returns an error if the URL is missing or invalid.
pub fn parse(matches: &clap::ArgMatches) -> Result<ApiConfig> {
    let url = matches
        .get_one::<String>(ARG_API_URL)
        .context("missing required argument: --api-url")?;

    ApiConfig::new(url).with_context(|| format!("invalid --api-url: {url}"))
}

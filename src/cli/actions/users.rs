use crate::api::{ApiConfig, Transport};
use crate::features::users::{CreateUserCommand, ListParams, UpdateUserCommand, UserService};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UserOp {
    List(ListParams),
    Get { id: i64 },
    Create(CreateUserCommand),
    Update { id: i64, command: UpdateUserCommand },
    Deactivate { id: i64 },
}

/// Run a single user operation and print the result as JSON.
/// # Errors
/// Returns an error if the request fails or the output cannot be written.
pub async fn execute(config: ApiConfig, op: UserOp) -> Result<()> {
    debug!("api base URL: {}", config.api_base_url());

    let service: UserService<Transport> =
        UserService::from_config(config).context("Failed to build user client")?;

    match op {
        UserOp::List(params) => print_json(&service.list_users(params).await?),
        UserOp::Get { id } => print_json(&service.get_user(id).await?),
        UserOp::Create(command) => print_json(&service.create_user(&command).await?),
        UserOp::Update { id, command } => print_json(&service.update_user(id, &command).await?),
        UserOp::Deactivate { id } => print_json(&service.deactivate_user(id).await?),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}

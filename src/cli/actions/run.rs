use crate::cli::actions::{Action, icons, users};
use anyhow::Result;

/// Execute the provided action. Single dispatch point for all CLI actions.
///
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Users { config, op } => users::execute(config, op).await,
        Action::Icons(op) => icons::execute(&op),
    }
}

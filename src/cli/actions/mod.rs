pub mod icons;
pub mod users;

// Internal "interpreter" for `Action`.
// We keep the match in a separate module so `mod.rs` stays small as more actions are added.
mod run;

use crate::api::ApiConfig;

#[derive(Debug)]
pub enum Action {
    Users {
        config: ApiConfig,
        op: users::UserOp,
    },
    Icons(icons::IconOp),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}

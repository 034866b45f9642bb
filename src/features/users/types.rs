use serde::{Deserialize, Serialize};

/// A user as returned by the API. `id` is always assigned by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub full_name: String,
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserCommand {
    pub email: String,
    pub username: String,
    pub full_name: String,
}

/// Partial update; omitted fields are left to the server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateUserCommand {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Error payload returned by the API on failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub message: String,
}

/// Offset pagination for the user list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListParams {
    pub skip: u32,
    pub limit: u32,
}

impl ListParams {
    pub const DEFAULT_SKIP: u32 = 0;
    pub const DEFAULT_LIMIT: u32 = 100;

    #[must_use]
    pub const fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }
}

impl Default for ListParams {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SKIP, Self::DEFAULT_LIMIT)
    }
}

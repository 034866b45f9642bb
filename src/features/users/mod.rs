pub mod client;
pub mod types;

pub use client::UserService;
pub use types::{ApiError, CreateUserCommand, ListParams, UpdateUserCommand, UserDto};

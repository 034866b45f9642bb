//! Request pipeline stages wrapped around the HTTP transport.

pub mod auth;
pub mod logging;

pub use auth::{AuthLayer, AuthService};
pub use logging::{LoggingLayer, LoggingService};

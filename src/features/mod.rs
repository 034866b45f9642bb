//! Domain-level client features. Each feature keeps its endpoint paths and DTOs
//! together so callers never assemble URLs themselves.

pub mod users;

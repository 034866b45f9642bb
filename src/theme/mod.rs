//! Shared visual assets.

pub mod icons;

pub use icons::{IconDefinition, IconRegistry};

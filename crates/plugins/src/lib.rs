//! Validation plugins run by a host ledger pipeline.
//!
//! Pure checks only: each plugin takes the directive list and returns it
//! unchanged along with the errors it found.

pub mod leafonly;
pub mod plugin;

pub use leafonly::{LeafOnly, LeafOnlyError, validate_leaf_only};
pub use plugin::{OptionsMap, Plugin, PluginOutput};

/// Names of the plugins this crate provides.
pub const PLUGINS: &[&str] = &[leafonly::PLUGIN_NAME];

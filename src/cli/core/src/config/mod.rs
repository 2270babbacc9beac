/* src/cli/core/src/config/mod.rs */

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{
  CONFIG_FILE, find_config, find_config_within, load_config, resolve_config, resolve_config_within,
};
pub use types::{ConditionConfig, TransformSection};

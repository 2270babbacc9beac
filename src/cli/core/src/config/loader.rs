/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::ConditionConfig;

pub const CONFIG_FILE: &str = "condition.toml";

/// Walk upward from `start` to find `condition.toml`, like Cargo.toml discovery
pub fn find_config(start: &Path) -> Result<PathBuf> {
  find_config_within(start, None)
}

/// Same walk, but never looks above `ceiling` (inclusive).
pub fn find_config_within(start: &Path, ceiling: Option<&Path>) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  let ceiling = ceiling
    .map(|c| c.canonicalize().with_context(|| format!("failed to canonicalize {}", c.display())))
    .transpose()?;
  loop {
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
      return Ok(candidate);
    }
    if ceiling.as_deref() == Some(dir.as_path()) || !dir.pop() {
      bail!("{CONFIG_FILE} not found (searched upward from {})", start.display());
    }
  }
}

pub fn load_config(path: &Path) -> Result<ConditionConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config: ConditionConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  config.validate().with_context(|| format!("invalid config {}", path.display()))?;
  Ok(config)
}

/// Explicit path must load; otherwise an auto-detected file is used when present,
/// falling back to defaults.
pub fn resolve_config(
  explicit: Option<&Path>,
  cwd: &Path,
) -> Result<(Option<PathBuf>, ConditionConfig)> {
  resolve_config_within(explicit, cwd, None)
}

pub fn resolve_config_within(
  explicit: Option<&Path>,
  cwd: &Path,
  ceiling: Option<&Path>,
) -> Result<(Option<PathBuf>, ConditionConfig)> {
  if let Some(path) = explicit {
    return Ok((Some(path.to_path_buf()), load_config(path)?));
  }
  match find_config_within(cwd, ceiling) {
    Ok(path) => {
      let config = load_config(&path)?;
      Ok((Some(path), config))
    }
    Err(_) => Ok((None, ConditionConfig::default())),
  }
}

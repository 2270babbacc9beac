/* src/cli/core/src/config/types.rs */

use anyhow::{Result, bail};
use serde::Deserialize;

use condition_transform::DEFAULT_EXTENSIONS;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConditionConfig {
  #[serde(default)]
  pub transform: TransformSection,
}

impl ConditionConfig {
  pub fn validate(&self) -> Result<()> {
    self.transform.validate()
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TransformSection {
  #[serde(default = "default_extensions")]
  pub extensions: Vec<String>,
  /// Directory names skipped while walking
  #[serde(default = "default_exclude")]
  pub exclude: Vec<String>,
  /// Unclosed tags fail the run instead of warning
  #[serde(default)]
  pub strict: bool,
  #[serde(default)]
  pub source_map: bool,
}

impl Default for TransformSection {
  fn default() -> Self {
    Self {
      extensions: default_extensions(),
      exclude: default_exclude(),
      strict: false,
      source_map: false,
    }
  }
}

impl TransformSection {
  pub fn validate(&self) -> Result<()> {
    if self.extensions.is_empty() {
      bail!("transform.extensions must not be empty");
    }
    if let Some(ext) = self.extensions.iter().find(|e| !e.starts_with('.') || e.len() < 2) {
      bail!("transform.extensions entry \"{ext}\" must look like \".tsx\"");
    }
    Ok(())
  }
}

fn default_extensions() -> Vec<String> {
  DEFAULT_EXTENSIONS.iter().map(|e| (*e).to_string()).collect()
}

fn default_exclude() -> Vec<String> {
  vec!["node_modules".to_string(), "dist".to_string()]
}

/* src/cli/core/src/walk.rs */

// Expand CLI path arguments into the list of source files to transform.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use condition_transform::is_transform_target_with;

use crate::config::TransformSection;
use crate::ui;

/// Files given directly are kept when they pass the extension filter; directories
/// are walked recursively, skipping `exclude` names. Symlinks are followed; a
/// directory reached twice through links is walked once. Output is sorted and deduplicated.
pub fn collect_sources(paths: &[PathBuf], section: &TransformSection) -> Result<Vec<PathBuf>> {
  let mut files = Vec::new();
  let mut visited = HashSet::new();

  for path in paths {
    if path.is_dir() {
      walk_dir(path, section, &mut visited, &mut files)?;
    } else if path.is_file() {
      if is_target(path, section) {
        files.push(path.clone());
      } else {
        ui::warn(&format!("skipping {} (extension not in transform.extensions)", path.display()));
      }
    } else {
      bail!("path not found: {}", path.display());
    }
  }

  files.sort();
  files.dedup();
  Ok(files)
}

fn walk_dir(
  dir: &Path,
  section: &TransformSection,
  visited: &mut HashSet<PathBuf>,
  out: &mut Vec<PathBuf>,
) -> Result<()> {
  let real =
    dir.canonicalize().with_context(|| format!("failed to canonicalize {}", dir.display()))?;
  if !visited.insert(real) {
    return Ok(());
  }

  let entries =
    std::fs::read_dir(dir).with_context(|| format!("failed to read directory {}", dir.display()))?;

  for entry in entries {
    let entry = entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
    let path = entry.path();
    // fs::metadata follows symlinks, unlike DirEntry::file_type
    let meta = match std::fs::metadata(&path) {
      Ok(meta) => meta,
      Err(e) => {
        ui::warn(&format!("skipping {} ({e})", path.display()));
        continue;
      }
    };

    if meta.is_dir() {
      let name = entry.file_name();
      if section.exclude.iter().any(|ex| name.to_str() == Some(ex.as_str())) {
        continue;
      }
      walk_dir(&path, section, visited, out)?;
    } else if meta.is_file() && is_target(&path, section) {
      out.push(path);
    }
  }

  Ok(())
}

fn is_target(path: &Path, section: &TransformSection) -> bool {
  path.to_str().is_some_and(|p| is_transform_target_with(p, &section.extensions))
}

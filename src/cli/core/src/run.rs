/* src/cli/core/src/run.rs */

// `condition transform` and `condition check`: read every selected file, run the
// core transform in memory, then write (or report) once everything succeeded.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result, bail};
use condition_transform::{Diagnostic, Transformed, transform_with_diagnostics};

use crate::config::TransformSection;
use crate::ui;
use crate::walk::collect_sources;

#[derive(Debug, Clone, Default)]
pub struct TransformOptions {
  /// Overwrite inputs in place
  pub write: bool,
  /// Mirror outputs under this directory instead
  pub out_dir: Option<PathBuf>,
  pub source_map: bool,
  pub strict: bool,
}

/// One file, transformed in memory.
#[derive(Debug)]
pub struct FileResult {
  pub path: PathBuf,
  pub source: String,
  pub output: Option<Transformed>,
  pub diagnostics: Vec<Diagnostic>,
}

pub fn transform_file(path: &Path) -> Result<FileResult> {
  let source =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let (output, diagnostics) = transform_with_diagnostics(&source);
  Ok(FileResult { path: path.to_path_buf(), source, output, diagnostics })
}

fn transform_all(files: &[PathBuf]) -> Result<Vec<FileResult>> {
  files.iter().map(|f| transform_file(f)).collect()
}

/// Print one warning per unclosed tag; returns how many there were.
fn report_diagnostics(results: &[FileResult]) -> usize {
  let mut count = 0;
  for result in results {
    for diagnostic in &result.diagnostics {
      ui::warn(&format!("{}:{diagnostic}", result.path.display()));
      count += 1;
    }
  }
  count
}

pub fn run_transform(
  paths: &[PathBuf],
  section: &TransformSection,
  opts: &TransformOptions,
  base_dir: &Path,
) -> Result<()> {
  let files = collect_sources(paths, section)?;
  if files.is_empty() {
    ui::warn("no matching source files");
    return Ok(());
  }

  let to_stdout = !opts.write && opts.out_dir.is_none();
  if to_stdout && files.len() > 1 {
    bail!("{} selected; pass --write or --out-dir", ui::plural(files.len(), "file"));
  }

  let results = transform_all(&files)?;
  let unclosed = report_diagnostics(&results);
  if opts.strict && unclosed > 0 {
    bail!("{} left untouched (strict mode)", ui::plural(unclosed, "unclosed <Condition> tag"));
  }

  if to_stdout {
    let result = &results[0];
    let code = result.output.as_ref().map_or(result.source.as_str(), |t| t.code.as_str());
    ui::output(code);
    return Ok(());
  }

  let dests = plan_destinations(&results, opts.out_dir.as_deref(), base_dir)?;

  let mut changed = 0;
  for (result, dest) in results.iter().zip(&dests) {
    match &result.output {
      Some(transformed) => {
        write_output(dest, result, transformed, opts.source_map, base_dir)?;
        ui::detail(&format!("{} -> {}", result.path.display(), dest.display()));
        changed += 1;
      }
      // Keep the mirrored tree complete
      None if opts.out_dir.is_some() => {
        write_file(dest, &result.source)?;
      }
      None => {}
    }
  }

  ui::ok(&format!("rewrote {changed} of {}", ui::plural(results.len(), "file")));
  Ok(())
}

pub fn run_check(paths: &[PathBuf], section: &TransformSection) -> Result<()> {
  let files = collect_sources(paths, section)?;
  let results = transform_all(&files)?;
  let unclosed = report_diagnostics(&results);

  let pending: Vec<&FileResult> = results.iter().filter(|r| r.output.is_some()).collect();
  for result in &pending {
    let tags = result.output.as_ref().map_or(0, |t| t.edits.len());
    ui::fail(&format!(
      "{} has {}",
      result.path.display(),
      ui::plural(tags, "top-level <Condition> tag")
    ));
  }

  if pending.is_empty() && unclosed == 0 {
    ui::ok(&format!("checked {}, nothing to rewrite", ui::plural(results.len(), "file")));
    return Ok(());
  }
  bail!(
    "{} to rewrite, {}",
    ui::plural(pending.len(), "file"),
    ui::plural(unclosed, "unclosed tag")
  );
}

/// In-place path, or the input mirrored under `out_dir`.
fn destination(path: &Path, out_dir: Option<&Path>, base_dir: &Path) -> PathBuf {
  let Some(out_dir) = out_dir else {
    return path.to_path_buf();
  };
  let rel = if path.is_relative() {
    path
  } else {
    match path.strip_prefix(base_dir) {
      Ok(rel) => rel,
      Err(_) => Path::new(path.file_name().unwrap_or_default()),
    }
  };
  // Drop `.`/`..` so output never escapes out_dir
  let rel: PathBuf = rel.components().filter(|c| matches!(c, Component::Normal(_))).collect();
  out_dir.join(rel)
}

/// Destinations for every result, in order. Fails without writing anything when
/// two inputs would land on the same output path.
fn plan_destinations(
  results: &[FileResult],
  out_dir: Option<&Path>,
  base_dir: &Path,
) -> Result<Vec<PathBuf>> {
  let mut seen: HashMap<PathBuf, &Path> = HashMap::new();
  let mut dests = Vec::with_capacity(results.len());

  for result in results {
    let dest = destination(&result.path, out_dir, base_dir);
    if let Some(first) = seen.insert(dest.clone(), &result.path) {
      bail!(
        "{} and {} would both be written to {}",
        first.display(),
        result.path.display(),
        dest.display()
      );
    }
    dests.push(dest);
  }

  Ok(dests)
}

/// Resolve `.`/`..` without touching the filesystem; relative paths are taken from `base_dir`.
fn absolutize(path: &Path, base_dir: &Path) -> PathBuf {
  let joined = if path.is_relative() { base_dir.join(path) } else { path.to_path_buf() };
  let mut out = PathBuf::new();
  for component in joined.components() {
    match component {
      Component::CurDir => {}
      Component::ParentDir => {
        out.pop();
      }
      other => out.push(other),
    }
  }
  out
}

/// `target` as seen from directory `from`, both resolved against `base_dir`.
fn relative_path(from: &Path, target: &Path, base_dir: &Path) -> PathBuf {
  let from = absolutize(from, base_dir);
  let target = absolutize(target, base_dir);
  let from: Vec<_> = from.components().collect();
  let target: Vec<_> = target.components().collect();

  let common = from.iter().zip(&target).take_while(|(a, b)| a == b).count();
  let mut rel = PathBuf::new();
  for _ in common..from.len() {
    rel.push("..");
  }
  for component in &target[common..] {
    rel.push(component);
  }
  rel
}

fn write_output(
  dest: &Path,
  result: &FileResult,
  transformed: &Transformed,
  source_map: bool,
  base_dir: &Path,
) -> Result<()> {
  if !source_map {
    return write_file(dest, &transformed.code);
  }

  let file_name = dest.file_name().and_then(|n| n.to_str()).unwrap_or("output.js");
  let map_name = format!("{file_name}.map");
  let map = transformed
    .map
    .clone()
    .with_file(file_name)
    // `sources` entries resolve relative to the map file's directory
    .with_source(
      relative_path(dest.parent().unwrap_or(Path::new("")), &result.path, base_dir)
        .to_string_lossy()
        .replace('\\', "/"),
      Some(&result.source),
    );

  let mut code = transformed.code.clone();
  if !code.ends_with('\n') {
    code.push('\n');
  }
  code.push_str(&format!("//# sourceMappingURL={map_name}\n"));

  write_file(dest, &code)?;
  write_file(&dest.with_file_name(&map_name), &map.to_json())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
  if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }
  std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

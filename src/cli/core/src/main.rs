/* src/cli/core/src/main.rs */

mod config;
mod run;
mod ui;
mod walk;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use config::resolve_config;
use run::{TransformOptions, run_check, run_transform};

#[derive(Parser)]
#[command(name = "condition", about = "Compile <Condition if={..}> tags into conditional JSX")]
struct Cli {
  /// Path to condition.toml (auto-detected if omitted)
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,
  /// Only print warnings and errors
  #[arg(short, long, global = true)]
  quiet: bool,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Rewrite files; a single file without --write/--out-dir prints to stdout
  Transform {
    /// Files or directories
    #[arg(required = true)]
    paths: Vec<PathBuf>,
    /// Overwrite files in place
    #[arg(short, long, conflicts_with = "out_dir")]
    write: bool,
    /// Write outputs under this directory, mirroring input paths
    #[arg(short, long)]
    out_dir: Option<PathBuf>,
    /// Write <file>.map next to each rewritten output
    #[arg(long)]
    source_map: bool,
    /// Fail when a <Condition> tag has no closing tag
    #[arg(long)]
    strict: bool,
  },
  /// Fail if any file still contains <Condition> tags
  Check {
    /// Files or directories
    #[arg(required = true)]
    paths: Vec<PathBuf>,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  ui::set_quiet(cli.quiet);

  let cwd = std::env::current_dir().context("failed to get cwd")?;
  let (config_path, config) = resolve_config(cli.config.as_deref(), &cwd)?;
  let section = &config.transform;

  match cli.command {
    Command::Transform { paths, write, out_dir, source_map, strict } => {
      let opts = TransformOptions {
        write,
        out_dir,
        source_map: source_map || section.source_map,
        strict: strict || section.strict,
      };
      // stdout mode keeps the banner off so output can be piped
      if opts.write || opts.out_dir.is_some() {
        ui::banner("transform");
        if let Some(path) = &config_path {
          ui::arrow(&format!("config {}", path.display()));
        }
      }
      run_transform(&paths, section, &opts, &cwd)?;
    }
    Command::Check { paths } => {
      ui::banner("check");
      run_check(&paths, section)?;
    }
  }

  Ok(())
}

/* src/cli/core/src/ui.rs */

use std::sync::atomic::{AtomicBool, Ordering};

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

const VERSION: &str = env!("CARGO_PKG_VERSION");

static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
  QUIET.store(quiet, Ordering::Relaxed);
}

fn quiet() -> bool {
  QUIET.load(Ordering::Relaxed)
}

pub fn ok(msg: &str) {
  if !quiet() {
    println!("  {GREEN}\u{2713}{RESET} {msg}");
  }
}

// Warnings and failures go to stderr so stdout stays clean for piped output
pub fn warn(msg: &str) {
  eprintln!("  {YELLOW}!{RESET} {msg}");
}

pub fn fail(msg: &str) {
  eprintln!("  {RED}\u{2717}{RESET} {msg}");
}

pub fn arrow(msg: &str) {
  if !quiet() {
    println!("  {GREEN}\u{2192}{RESET} {msg}");
  }
}

pub fn detail(msg: &str) {
  if !quiet() {
    println!("        {msg}");
  }
}

pub fn banner(cmd: &str) {
  if !quiet() {
    println!();
    println!("  {BOLD}condition{RESET} {cmd} {DIM}v{VERSION}{RESET}");
    println!();
  }
}

/// Raw program output (piped rewrite results); printed even when quiet.
pub fn output(text: &str) {
  print!("{text}");
}

pub fn plural(n: usize, word: &str) -> String {
  if n == 1 { format!("{n} {word}") } else { format!("{n} {word}s") }
}

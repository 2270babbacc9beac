/* src/transform/rust/src/lib.rs */

mod diagnostic;
mod filter;
mod matcher;
mod rewrite;
mod source_map;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use filter::{DEFAULT_EXTENSIONS, is_transform_target, is_transform_target_with};
pub use matcher::{CLOSE_TAG, ConditionMatch, OPEN_MARKER, find_matches, outermost};
pub use rewrite::{Edit, WrapperKind, wrapper_kind};
pub use source_map::SourceMap;

use matcher::scan;
use rewrite::rewrite_document;

/// Rewritten source plus the map back to the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
  pub code: String,
  pub map: SourceMap,
  /// Top-level replacements, in input coordinates.
  pub edits: Vec<Edit>,
}

/// Compile `<Condition if={..}>` tags away. `None` means nothing changed:
/// no tag present, or none with a resolvable closing tag.
pub fn transform(code: &str) -> Option<Transformed> {
  if !code.contains(OPEN_MARKER) {
    return None;
  }
  let (rewritten, edits) = rewrite_document(code)?;
  let map = SourceMap::build(code, &edits);
  Some(Transformed { code: rewritten, map, edits })
}

/// Like `transform` but also reports opening tags left untouched because
/// no balancing `</Condition>` exists.
pub fn transform_with_diagnostics(code: &str) -> (Option<Transformed>, Vec<Diagnostic>) {
  if !code.contains(OPEN_MARKER) {
    return (None, Vec::new());
  }
  // Every opener nested inside a resolved pair resolves too, so the
  // top-level scan already sees every unclosed tag in the document.
  let (_, unclosed) = scan(code);
  let diagnostics = unclosed.iter().map(|open| Diagnostic::unclosed(code, open)).collect();
  (transform(code), diagnostics)
}

#[cfg(test)]
mod tests;

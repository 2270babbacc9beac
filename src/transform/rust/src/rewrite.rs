/* src/transform/rust/src/rewrite.rs */

use std::borrow::Cow;

use crate::matcher::{OPEN_MARKER, find_matches, outermost};

/// How a replacement is spliced into the surrounding code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapperKind {
  /// Preceded by `(`, `return` or `{`: a bare expression fits as-is.
  Bare,
  /// Anywhere else (JSX children, assignments): wrapped in `{Boolean(..) ..}`.
  Expression,
}

/// Classify the slot at `position` by looking at the trimmed text before it.
pub fn wrapper_kind(code: &str, position: usize) -> WrapperKind {
  let before = code[..position].trim_end();
  if before.ends_with('(') || before.ends_with("return") || before.ends_with('{') {
    WrapperKind::Bare
  } else {
    WrapperKind::Expression
  }
}

pub(crate) fn render_replacement(kind: WrapperKind, condition: &str, content: &str) -> String {
  match kind {
    WrapperKind::Bare => format!("{condition} ? <>{content}</> : null"),
    WrapperKind::Expression => format!("{{Boolean({condition}) ? <>{content}</> : null}}"),
  }
}

/// A top-level span replacement, in the coordinates of the input document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
  pub start: usize,
  pub end: usize,
  pub replacement: String,
}

/// Rewrite every Condition tag in `code`.
/// Returns the new text and the top-level edits (ascending by `start`),
/// or `None` when nothing resolvable was found.
pub(crate) fn rewrite_document(code: &str) -> Option<(String, Vec<Edit>)> {
  let matches = outermost(find_matches(code));
  if matches.is_empty() {
    return None;
  }

  let mut out = code.to_string();
  let mut edits = Vec::with_capacity(matches.len());

  // Last to first: splicing a later span never moves an earlier start offset
  for m in matches.iter().rev() {
    let kind = wrapper_kind(&out, m.start);

    let content: Cow<'_, str> = if m.content.contains(OPEN_MARKER) {
      match rewrite_document(m.content) {
        Some((inner, _)) => Cow::Owned(inner),
        None => Cow::Borrowed(m.content),
      }
    } else {
      Cow::Borrowed(m.content)
    };

    let replacement = render_replacement(kind, m.condition, &content);
    out.replace_range(m.start..m.end, &replacement);
    edits.push(Edit { start: m.start, end: m.end, replacement });
  }

  edits.reverse();
  Some((out, edits))
}

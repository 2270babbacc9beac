/* src/transform/rust/src/matcher.rs */

// Locate `<Condition if={..}>` / `</Condition>` pairs in raw source text.
// Nothing here understands JS or JSX: the opening tag is matched by pattern and
// the closing tag is resolved by counting literal markers.

use std::sync::OnceLock;

use memchr::memmem;
use regex::Regex;

/// Literal prefix shared by every opening tag. Also counts as a nesting
/// marker while resolving closing tags, even when the full pattern does not match.
pub const OPEN_MARKER: &str = "<Condition";
pub const CLOSE_TAG: &str = "</Condition>";

fn open_tag_re() -> &'static Regex {
  static RE: OnceLock<Regex> = OnceLock::new();
  // The condition stops at the first `}`; object literals are not supported.
  RE.get_or_init(|| Regex::new(r"<Condition\s+if=\{([^}]+)\}\s*>").expect("open tag pattern"))
}

/// One resolved `<Condition>` pair. Offsets are byte offsets into the text it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionMatch<'a> {
  /// Start of the opening tag.
  pub start: usize,
  /// Just past the closing tag.
  pub end: usize,
  /// Start of `content` (end of the opening tag).
  pub content_start: usize,
  /// Raw text between `if={` and the first `}`.
  pub condition: &'a str,
  /// Raw text between the opening and closing tags.
  pub content: &'a str,
}

/// An opening tag whose closing tag could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UnclosedOpen<'a> {
  pub(crate) start: usize,
  pub(crate) condition: &'a str,
}

#[derive(Debug)]
pub(crate) enum Found<'a> {
  Matched(ConditionMatch<'a>),
  Unclosed(UnclosedOpen<'a>),
}

/// Find the next opening tag at or after `from` and try to resolve it.
/// Returns what was found and the offset to resume scanning from (the end of
/// the opening tag, so nested openers are visited too).
pub(crate) fn next_opening(code: &str, from: usize) -> Option<(Found<'_>, usize)> {
  let caps = open_tag_re().captures_at(code, from)?;
  let whole = caps.get(0)?;
  let condition = caps.get(1)?.as_str();
  let open_end = whole.end();

  let found = match find_closing_tag(code, open_end) {
    Some(close_start) => Found::Matched(ConditionMatch {
      start: whole.start(),
      end: close_start + CLOSE_TAG.len(),
      content_start: open_end,
      condition,
      content: &code[open_end..close_start],
    }),
    None => Found::Unclosed(UnclosedOpen { start: whole.start(), condition }),
  };
  Some((found, open_end))
}

/// Resolve the closing tag for an opener whose tag ends at `from`.
/// Returns the start offset of the balancing `</Condition>`.
pub(crate) fn find_closing_tag(code: &str, from: usize) -> Option<usize> {
  let bytes = code.as_bytes();
  let mut depth = 1usize;
  let mut pos = from;

  while pos < bytes.len() {
    let close = pos + memmem::find(&bytes[pos..], CLOSE_TAG.as_bytes())?;
    match memmem::find(&bytes[pos..close], OPEN_MARKER.as_bytes()) {
      Some(rel) => {
        depth += 1;
        pos += rel + OPEN_MARKER.len();
      }
      None => {
        depth -= 1;
        if depth == 0 {
          return Some(close);
        }
        pos = close + CLOSE_TAG.len();
      }
    }
  }

  None
}

/// Every resolvable match in `code`, nested ones included, in discovery order.
pub fn find_matches(code: &str) -> Vec<ConditionMatch<'_>> {
  scan(code).0
}

/// Single pass collecting resolved matches and unresolved openers.
pub(crate) fn scan(code: &str) -> (Vec<ConditionMatch<'_>>, Vec<UnclosedOpen<'_>>) {
  let mut matches = Vec::new();
  let mut unclosed = Vec::new();
  let mut pos = 0;

  while let Some((found, resume)) = next_opening(code, pos) {
    match found {
      Found::Matched(m) => matches.push(m),
      Found::Unclosed(u) => unclosed.push(u),
    }
    pos = resume;
  }

  (matches, unclosed)
}

/// Drop matches that sit inside an earlier kept match.
pub fn outermost<'a>(matches: Vec<ConditionMatch<'a>>) -> Vec<ConditionMatch<'a>> {
  let mut kept: Vec<ConditionMatch<'a>> = Vec::with_capacity(matches.len());
  for m in matches {
    if kept.last().is_some_and(|prev| m.start < prev.end) {
      continue;
    }
    kept.push(m);
  }
  kept
}

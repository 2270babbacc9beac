/* src/transform/rust/src/diagnostic.rs */

use serde::Serialize;

use crate::matcher::UnclosedOpen;

/// Problem found while scanning. `transform` never reports these; callers that
/// want strict validation use `transform_with_diagnostics`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
  pub kind: DiagnosticKind,
  /// Byte offset of the opening tag.
  pub offset: usize,
  /// 1-based line of the opening tag.
  pub line: usize,
  /// 1-based column, in characters.
  pub column: usize,
  /// Condition text of the offending tag.
  pub condition: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
  /// Opening tag with no balancing `</Condition>`; left untouched in the output
  UnclosedTag,
}

impl Diagnostic {
  pub(crate) fn unclosed(code: &str, open: &UnclosedOpen<'_>) -> Self {
    let (line, column) = line_column(code, open.start);
    Self {
      kind: DiagnosticKind::UnclosedTag,
      offset: open.start,
      line,
      column,
      condition: open.condition.to_string(),
    }
  }
}

impl std::fmt::Display for Diagnostic {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self.kind {
      DiagnosticKind::UnclosedTag => write!(
        f,
        "{}:{}: <Condition if={{{}}}> has no matching </Condition>",
        self.line, self.column, self.condition
      ),
    }
  }
}

fn line_column(code: &str, offset: usize) -> (usize, usize) {
  let before = &code[..offset];
  let line = before.matches('\n').count() + 1;
  let line_start = before.rfind('\n').map_or(0, |p| p + 1);
  let column = before[line_start..].chars().count() + 1;
  (line, column)
}

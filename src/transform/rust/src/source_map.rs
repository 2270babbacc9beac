/* src/transform/rust/src/source_map.rs */

// Source Map v3 for a rewritten document. Granularity is coarse: one segment per
// generated line of untouched text and per line of each replacement, which is
// what bundlers need to point stack traces back at the original component.
// Columns count UTF-16 code units, as JS consumers expect.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use serde::Serialize;

use crate::rewrite::Edit;

const VLQ_ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMap {
  pub version: u8,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub file: Option<String>,
  pub sources: Vec<Option<String>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub sources_content: Option<Vec<Option<String>>>,
  pub names: Vec<String>,
  pub mappings: String,
}

impl SourceMap {
  /// Build the map for `original` after `edits` (ascending, non-overlapping) were applied.
  pub(crate) fn build(original: &str, edits: &[Edit]) -> Self {
    let mut builder = MappingsBuilder::default();
    let mut cursor = 0;

    for edit in edits {
      builder.unedited(&original[cursor..edit.start]);
      builder.edit(&edit.replacement);
      builder.skip_original(&original[edit.start..edit.end]);
      cursor = edit.end;
    }
    builder.unedited(&original[cursor..]);

    Self {
      version: 3,
      file: None,
      sources: vec![None],
      sources_content: None,
      names: Vec::new(),
      mappings: builder.encode(),
    }
  }

  pub fn with_file(mut self, file: impl Into<String>) -> Self {
    self.file = Some(file.into());
    self
  }

  /// Name the single source and optionally embed its content.
  pub fn with_source(mut self, name: impl Into<String>, content: Option<&str>) -> Self {
    self.sources = vec![Some(name.into())];
    self.sources_content = content.map(|c| vec![Some(c.to_string())]);
    self
  }

  pub fn to_json(&self) -> String {
    serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
  }

  /// Inline form for a `//# sourceMappingURL=` comment.
  pub fn to_data_url(&self) -> String {
    format!(
      "data:application/json;charset=utf-8;base64,{}",
      BASE64_STANDARD.encode(self.to_json())
    )
  }
}

/// `[generated column, source index, original line, original column]`
type Segment = [u32; 4];

#[derive(Default)]
struct MappingsBuilder {
  lines: Vec<Vec<Segment>>,
  gen_column: u32,
  orig_line: u32,
  orig_column: u32,
}

impl MappingsBuilder {
  fn current_line(&mut self) -> &mut Vec<Segment> {
    if self.lines.is_empty() {
      self.lines.push(Vec::new());
    }
    let last = self.lines.len() - 1;
    &mut self.lines[last]
  }

  fn push_segment(&mut self, orig_line: u32, orig_column: u32) {
    let segment = [self.gen_column, 0, orig_line, orig_column];
    self.current_line().push(segment);
  }

  fn new_line(&mut self) {
    self.current_line();
    self.lines.push(Vec::new());
    self.gen_column = 0;
  }

  /// Copied text: a segment at the chunk start and at the first character of every line.
  fn unedited(&mut self, chunk: &str) {
    let mut first = true;
    for ch in chunk.chars() {
      if ch == '\n' {
        self.new_line();
        self.orig_line += 1;
        self.orig_column = 0;
        first = true;
      } else {
        if first {
          self.push_segment(self.orig_line, self.orig_column);
          first = false;
        }
        let width = ch.len_utf16() as u32;
        self.gen_column += width;
        self.orig_column += width;
      }
    }
  }

  /// Replacement text: every generated line it touches maps to the replaced span's start.
  fn edit(&mut self, content: &str) {
    if content.is_empty() {
      return;
    }
    let (line, column) = (self.orig_line, self.orig_column);
    let mut parts = content.split('\n').peekable();
    let mut first = true;
    while let Some(part) = parts.next() {
      let is_last = parts.peek().is_none();
      if !first {
        self.new_line();
      }
      if first || !is_last || !part.is_empty() {
        self.push_segment(line, column);
      }
      self.gen_column += part.encode_utf16().count() as u32;
      first = false;
    }
  }

  /// Advance the original position over text that produced no output.
  fn skip_original(&mut self, text: &str) {
    for ch in text.chars() {
      if ch == '\n' {
        self.orig_line += 1;
        self.orig_column = 0;
      } else {
        self.orig_column += ch.len_utf16() as u32;
      }
    }
  }

  fn encode(&self) -> String {
    let mut out = String::new();
    let mut prev_source = 0i64;
    let mut prev_line = 0i64;
    let mut prev_column = 0i64;

    for (i, line) in self.lines.iter().enumerate() {
      if i > 0 {
        out.push(';');
      }
      let mut prev_gen = 0i64;
      for (j, seg) in line.iter().enumerate() {
        if j > 0 {
          out.push(',');
        }
        let [gen_col, source, orig_line, orig_col] = seg.map(i64::from);
        encode_vlq(&mut out, gen_col - prev_gen);
        encode_vlq(&mut out, source - prev_source);
        encode_vlq(&mut out, orig_line - prev_line);
        encode_vlq(&mut out, orig_col - prev_column);
        prev_gen = gen_col;
        prev_source = source;
        prev_line = orig_line;
        prev_column = orig_col;
      }
    }

    out
  }
}

fn encode_vlq(out: &mut String, value: i64) {
  let mut vlq = if value < 0 { ((-value) << 1) | 1 } else { value << 1 };
  loop {
    let mut digit = (vlq & 0b11111) as usize;
    vlq >>= 5;
    if vlq > 0 {
      digit |= 0b100000;
    }
    out.push(VLQ_ALPHABET[digit] as char);
    if vlq == 0 {
      break;
    }
  }
}

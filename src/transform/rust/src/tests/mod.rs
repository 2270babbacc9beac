/* src/transform/rust/src/tests/mod.rs */

use super::*;


fn code(input: &str) -> Option<String> {
  transform(input).map(|t| t.code)
}

// -- no-op detection --

#[test]
fn no_condition_tag_returns_none() {
  let input = "function App() {\n  return <div>Hello World</div>\n}";
  assert_eq!(transform(input), None);
}

#[test]
fn no_op_is_idempotent() {
  let input = "const a = <Conditional />; // not ours";
  assert_eq!(transform(input), None);
  assert_eq!(transform(input), None);
}

#[test]
fn output_without_tags_is_stable() {
  let input = "function App({ show }) { return <Condition if={show}><p>Hi</p></Condition> }";
  let first = code(input).unwrap();
  assert_eq!(transform(&first), None);
}

#[test]
fn only_unresolvable_tags_returns_none() {
  let input = "<div><Condition if={x}><p>open</p></div>";
  assert_eq!(transform(input), None);
}

// -- wrapper context --

#[test]
fn return_inline() {
  let input = "function App({ show }) { return <Condition if={show}><p>Hi</p></Condition> }";
  assert_eq!(
    code(input).unwrap(),
    "function App({ show }) { return show ? <><p>Hi</p></> : null }"
  );
}

#[test]
fn return_multiline() {
  let input = "function App({ condition }) {
  return <Condition if={condition}>
    <div>Return context</div>
  </Condition>
}";
  let expected = "function App({ condition }) {
  return condition ? <>
    <div>Return context</div>
  </> : null
}";
  assert_eq!(code(input).unwrap(), expected);
}

#[test]
fn inside_jsx_children() {
  let input = "function App({ showMessage }) {
  return (
    <div>
      <Condition if={showMessage}>
        <p>Hello World</p>
      </Condition>
    </div>
  )
}";
  let expected = "function App({ showMessage }) {
  return (
    <div>
      {Boolean(showMessage) ? <>
        <p>Hello World</p>
      </> : null}
    </div>
  )
}";
  assert_eq!(code(input).unwrap(), expected);
}

#[test]
fn directly_inside_parens() {
  let input = "const view = (\n  <Condition if={ready}><Main /></Condition>\n)";
  let expected = "const view = (\n  ready ? <><Main /></> : null\n)";
  assert_eq!(code(input).unwrap(), expected);
}

#[test]
fn directly_inside_braces() {
  let input = "<ul>{<Condition if={ok}><li /></Condition>}</ul>";
  assert_eq!(code(input).unwrap(), "<ul>{ok ? <><li /></> : null}</ul>");
}

#[test]
fn assignment_uses_braced_form() {
  for keyword in ["const", "let", "var"] {
    let input = format!(
      "function App({{ show }}) {{
  {keyword} element = <Condition if={{show}}>
    <span>Assignment</span>
  </Condition>
  return element
}}"
    );
    let expected = format!(
      "function App({{ show }}) {{
  {keyword} element = {{Boolean(show) ? <>
    <span>Assignment</span>
  </> : null}}
  return element
}}"
    );
    assert_eq!(code(&input).unwrap(), expected, "{keyword}");
  }
}

#[test]
fn same_tag_differs_by_context() {
  let tag = "<Condition if={ok}><b /></Condition>";
  assert_eq!(code(&format!("return {tag}")).unwrap(), "return ok ? <><b /></> : null");
  assert_eq!(
    code(&format!("<div>{tag}</div>")).unwrap(),
    "<div>{Boolean(ok) ? <><b /></> : null}</div>"
  );
}

// -- conditions --

#[test]
fn complex_condition_expression() {
  let input = "function App({ user, isLoggedIn }) {
  return (
    <div>
      <Condition if={user && isLoggedIn}>
        <p>Welcome {user.name}</p>
      </Condition>
    </div>
  )
}";
  let expected = "function App({ user, isLoggedIn }) {
  return (
    <div>
      {Boolean(user && isLoggedIn) ? <>
        <p>Welcome {user.name}</p>
      </> : null}
    </div>
  )
}";
  assert_eq!(code(input).unwrap(), expected);
}

#[test]
fn member_call_condition_with_braces_in_content() {
  let input = "function App({ items }) {
  return (
    <div>
      <Condition if={items.length > 0}>
        <ul>
          {items.map(item => <li key={item.id}>{item.name}</li>)}
        </ul>
      </Condition>
    </div>
  )
}";
  let expected = "function App({ items }) {
  return (
    <div>
      {Boolean(items.length > 0) ? <>
        <ul>
          {items.map(item => <li key={item.id}>{item.name}</li>)}
        </ul>
      </> : null}
    </div>
  )
}";
  assert_eq!(code(input).unwrap(), expected);
}

// -- siblings --

#[test]
fn sibling_tags_rewrite_independently() {
  let input = "function App({ showFirst, showSecond }) {
  return (
    <div>
      <Condition if={showFirst}>
        <p>First condition</p>
      </Condition>
      <Condition if={showSecond}>
        <p>Second condition</p>
      </Condition>
    </div>
  )
}";
  let expected = "function App({ showFirst, showSecond }) {
  return (
    <div>
      {Boolean(showFirst) ? <>
        <p>First condition</p>
      </> : null}
      {Boolean(showSecond) ? <>
        <p>Second condition</p>
      </> : null}
    </div>
  )
}";
  assert_eq!(code(input).unwrap(), expected);
}

#[test]
fn adjacent_siblings_on_one_line() {
  let input = "<p><Condition if={a}>A</Condition><Condition if={b}>B</Condition></p>";
  assert_eq!(
    code(input).unwrap(),
    "<p>{Boolean(a) ? <>A</> : null}{Boolean(b) ? <>B</> : null}</p>"
  );
}

// -- transform result --

#[test]
fn edits_cover_replaced_spans() {
  let input = "return <Condition if={a}>x</Condition>";
  let result = transform(input).unwrap();
  assert_eq!(result.edits, vec![Edit { start: 7, end: input.len(), replacement: "a ? <>x</> : null".into() }]);
  assert_eq!(result.map.version, 3);
  assert!(!result.map.mappings.is_empty());
}

#[test]
fn diagnostics_report_unclosed_tag() {
  let input = "<div>\n  <Condition if={a}>x</Condition>\n  <Condition if={b}>\n</div>";
  let (result, diagnostics) = transform_with_diagnostics(input);
  assert_eq!(
    result.unwrap().code,
    "<div>\n  {Boolean(a) ? <>x</> : null}\n  <Condition if={b}>\n</div>"
  );
  assert_eq!(diagnostics.len(), 1);
  assert_eq!(diagnostics[0].kind, DiagnosticKind::UnclosedTag);
  assert_eq!(diagnostics[0].condition, "b");
  assert_eq!((diagnostics[0].line, diagnostics[0].column), (3, 3));
}

#[test]
fn diagnostics_empty_for_clean_input() {
  let (result, diagnostics) = transform_with_diagnostics("return <Condition if={a}>x</Condition>");
  assert!(result.is_some());
  assert!(diagnostics.is_empty());
}

#[test]
fn diagnostics_without_any_tag() {
  assert_eq!(transform_with_diagnostics("<div />"), (None, Vec::new()));
}

/* src/cli/core/src/config/tests/parsing.rs */

use super::*;

#[test]
fn parse_empty_config_uses_defaults() {
  let config: ConditionConfig = toml::from_str("").unwrap();
  assert_eq!(config.transform.extensions, vec![".js", ".jsx", ".ts", ".tsx"]);
  assert_eq!(config.transform.exclude, vec!["node_modules", "dist"]);
  assert!(!config.transform.strict);
  assert!(!config.transform.source_map);
  assert!(config.validate().is_ok());
}

#[test]
fn parse_full_config() {
  let toml_str = r#"
[transform]
extensions = [".tsx", ".mdx"]
exclude = ["build"]
strict = true
source_map = true
"#;
  let config: ConditionConfig = toml::from_str(toml_str).unwrap();
  assert_eq!(config.transform.extensions, vec![".tsx", ".mdx"]);
  assert_eq!(config.transform.exclude, vec!["build"]);
  assert!(config.transform.strict);
  assert!(config.transform.source_map);
}

#[test]
fn parse_partial_section_keeps_other_defaults() {
  let config: ConditionConfig = toml::from_str("[transform]\nstrict = true\n").unwrap();
  assert!(config.transform.strict);
  assert_eq!(config.transform.extensions.len(), 4);
}

#[test]
fn reject_empty_extensions() {
  let config: ConditionConfig = toml::from_str("[transform]\nextensions = []\n").unwrap();
  let err = config.validate().unwrap_err();
  assert!(err.to_string().contains("must not be empty"));
}

#[test]
fn reject_extension_without_dot() {
  let config: ConditionConfig = toml::from_str("[transform]\nextensions = [\"tsx\"]\n").unwrap();
  let err = config.validate().unwrap_err();
  assert!(err.to_string().contains("\"tsx\""));
}

#[test]
fn reject_unknown_value_type() {
  assert!(toml::from_str::<ConditionConfig>("[transform]\nstrict = \"yes\"\n").is_err());
}

/* src/transform/rust/src/filter.rs */

/// Extensions a bundler should hand to `transform`.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".js", ".jsx", ".ts", ".tsx"];

/// Case-sensitive suffix check against [`DEFAULT_EXTENSIONS`].
pub fn is_transform_target(id: &str) -> bool {
  is_transform_target_with(id, DEFAULT_EXTENSIONS)
}

pub fn is_transform_target_with<S: AsRef<str>>(id: &str, extensions: &[S]) -> bool {
  extensions.iter().any(|ext| id.ends_with(ext.as_ref()))
}

use std::collections::BTreeSet;
use std::path::Path;

/// Extensions treated as binary when no configuration overrides them.
pub const DEFAULT_BINARY_EXTENSIONS: [&str; 7] =
    ["gif", "png", "jpg", "jpeg", "ico", "webp", "bmp"];

/// Decides which files the substitution pass leaves untouched.
///
/// Matching is on the final extension only, case-insensitively, with or without
/// a leading dot in the configured entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryFilter {
    extensions: BTreeSet<String>,
}

impl BinaryFilter {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        Self { extensions }
    }

    pub fn is_excluded(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.contains(&ext.to_lowercase()))
    }
}

impl Default for BinaryFilter {
    fn default() -> Self {
        Self::new(DEFAULT_BINARY_EXTENSIONS)
    }
}

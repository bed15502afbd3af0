//! Options for decoding raw query input.
//!
//! `ParseOptions` deserializes from any serde format, so hosts can keep it
//! next to the rest of their configuration:
//!
//! ```rust
//! use sift_query::ParseOptions;
//!
//! let options: ParseOptions = serde_json::from_str(r#"{ "skip_empty_values": false }"#).unwrap();
//! assert!(!options.skip_empty_values);
//! assert!(options.trim_keys);
//! ```

use serde::{Deserialize, Serialize};

/// How query strings and form payloads are turned into raw pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Drop pairs whose value is empty (`age=`), as unfilled form inputs send them.
    pub skip_empty_values: bool,
    /// Strip surrounding whitespace from keys before matching them.
    pub trim_keys: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            skip_empty_values: true,
            trim_keys: true,
        }
    }
}

impl ParseOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep or drop empty values.
    pub fn skip_empty_values(mut self, skip: bool) -> Self {
        self.skip_empty_values = skip;
        self
    }

    /// Trim keys or match them verbatim.
    pub fn trim_keys(mut self, trim: bool) -> Self {
        self.trim_keys = trim;
        self
    }

    /// Apply these options to one decoded pair.
    ///
    /// Returns `None` when the pair should be dropped.
    pub fn apply<'a>(&self, key: &'a str, value: &'a str) -> Option<(&'a str, &'a str)> {
        let key = if self.trim_keys { key.trim() } else { key };
        if self.skip_empty_values && value.is_empty() {
            return None;
        }
        Some((key, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ParseOptions::default();
        assert!(options.skip_empty_values);
        assert!(options.trim_keys);
    }

    #[test]
    fn test_apply() {
        let options = ParseOptions::new();
        assert_eq!(options.apply(" age ", "30"), Some(("age", "30")));
        assert_eq!(options.apply("age", ""), None);

        let verbatim = ParseOptions::new().skip_empty_values(false).trim_keys(false);
        assert_eq!(verbatim.apply(" age ", ""), Some((" age ", "")));
    }

    #[test]
    fn test_from_toml() {
        let options: ParseOptions = toml::from_str("trim_keys = false").unwrap();
        assert!(!options.trim_keys);
        assert!(options.skip_empty_values);
    }
}

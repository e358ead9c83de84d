use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::DecodeError;

/// Extension appended to every generated file name on display.
pub const FILE_SUFFIX: &str = ".mcfunction";

/// Generated files keyed by basename, in the order the compiler emitted them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileSet {
    files: IndexMap<String, String>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object of `basename -> content`.
    ///
    /// Key order in the source text is kept.
    pub fn from_json(raw: &str) -> crate::Result<Self> {
        let set: FileSet = serde_json::from_str(raw)?;
        if set.files.keys().any(|name| name.is_empty()) {
            return Err(DecodeError::EmptyFileName);
        }
        Ok(set)
    }

    /// Insert a file, replacing the content of an existing basename in place.
    pub fn insert(&mut self, basename: impl Into<String>, content: impl Into<String>) {
        self.files.insert(basename.into(), content.into());
    }

    pub fn get(&self, basename: &str) -> Option<&str> {
        self.files.get(basename).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate `(basename, content)` pairs in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The display name of a generated file.
    pub fn display_name(basename: &str) -> String {
        format!("{basename}{FILE_SUFFIX}")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FileSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = FileSet::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_keeps_emission_order() {
        let set = FileSet::from_json(r#"{"zeta":"a","alpha":"b","mid":"c"}"#).unwrap();
        let names: Vec<&str> = set.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_from_json_multiline_content() {
        let set = FileSet::from_json(r#"{"load":"scoreboard objectives add x dummy\nsay hi"}"#)
            .unwrap();
        assert_eq!(
            set.get("load"),
            Some("scoreboard objectives add x dummy\nsay hi")
        );
    }

    #[test]
    fn test_from_json_rejects_empty_name() {
        let err = FileSet::from_json(r#"{"":"say hi"}"#).unwrap_err();
        assert!(matches!(err, DecodeError::EmptyFileName));
    }

    #[test]
    fn test_from_json_rejects_non_string_values() {
        let err = FileSet::from_json(r#"{"main":["say hi"]}"#).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedFileSet(_)));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(FileSet::display_name("main"), "main.mcfunction");
    }

    #[test]
    fn test_collect_and_replace() {
        let mut set: FileSet = [("main", "say a"), ("tick", "say b")].into_iter().collect();
        set.insert("main", "say c");
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("main"), Some("say c"));
        assert_eq!(set.iter().next(), Some(("main", "say c")));
    }
}

/// Namespace used when the namespace field is left blank.
pub const DEFAULT_NAMESPACE: &str = "namespace";

/// Snapshot of the two editable fields at the time of an edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceDocument {
    pub namespace: String,
    pub code: String,
}

impl SourceDocument {
    pub fn new(namespace: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            code: code.into(),
        }
    }

    /// `true` when the code is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.code.trim().is_empty()
    }

    /// The namespace to compile under, falling back to `default` when the
    /// field is blank.
    pub fn namespace_or<'a>(&'a self, default: &'a str) -> &'a str {
        if self.namespace.trim().is_empty() {
            default
        } else {
            &self.namespace
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_code() {
        assert!(SourceDocument::new("ns", "").is_blank());
        assert!(SourceDocument::new("ns", " \n\t\r\n").is_blank());
        assert!(!SourceDocument::new("", " say hi ").is_blank());
    }

    #[test]
    fn test_namespace_fallback() {
        let doc = SourceDocument::new("", "x");
        assert_eq!(doc.namespace_or(DEFAULT_NAMESPACE), "namespace");
        let doc = SourceDocument::new("  ", "x");
        assert_eq!(doc.namespace_or(DEFAULT_NAMESPACE), "namespace");
        let doc = SourceDocument::new("my_pack", "x");
        assert_eq!(doc.namespace_or(DEFAULT_NAMESPACE), "my_pack");
    }
}

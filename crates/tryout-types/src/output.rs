use serde::{Deserialize, Serialize};

use crate::{Diagnostic, FileSet};

/// A decoded compiler result: exactly one of the two payload shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Output {
    Files(FileSet),
    Diagnostic(Diagnostic),
}

impl Output {
    pub fn is_files(&self) -> bool {
        matches!(self, Output::Files(_))
    }

    pub fn is_diagnostic(&self) -> bool {
        matches!(self, Output::Diagnostic(_))
    }
}

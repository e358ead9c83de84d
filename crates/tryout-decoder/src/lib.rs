//! Raw compiler result → [`Output`].
//!
//! The compiler entry point returns a single string. When it starts with
//! `{` it is a JSON object of generated files; anything else is a
//! diagnostic carrying inline style markers. The first character alone
//! decides, so every input maps to exactly one shape.

use tryout_types::{Diagnostic, FileSet, Output};

/// First character of a file set payload.
pub const FILE_SET_PREFIX: char = '{';

/// Classify and parse a raw compiler result.
///
/// A file set payload that fails to parse is an engine defect and comes
/// back as an error; it is never reinterpreted as a diagnostic.
pub fn classify(raw: &str) -> tryout_types::Result<Output> {
    if raw.starts_with(FILE_SET_PREFIX) {
        let files = FileSet::from_json(raw)?;
        tracing::debug!(files = files.len(), "decoded file set");
        Ok(Output::Files(files))
    } else {
        let diagnostic = Diagnostic::new(tryout_lexer::decode(raw));
        tracing::debug!(runs = diagnostic.len(), "decoded diagnostic");
        Ok(Output::Diagnostic(diagnostic))
    }
}

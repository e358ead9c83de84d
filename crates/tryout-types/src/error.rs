use thiserror::Error;

/// Errors raised while decoding a compiler result.
///
/// The compiler is trusted to emit well-formed payloads, so any of these
/// indicates a broken engine rather than a user mistake. They are never
/// rendered as a diagnostic.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// A `{`-prefixed result that is not a JSON object of strings.
    #[error("malformed file set payload: {0}")]
    MalformedFileSet(#[from] serde_json::Error),

    /// A file set entry with an empty basename.
    #[error("file set contains an empty file name")]
    EmptyFileName,
}

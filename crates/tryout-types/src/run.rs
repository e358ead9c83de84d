use serde::{Deserialize, Serialize};

/// A fragment of diagnostic text with its display style.
///
/// The two flags are independent: a run can be colored, underlined, both,
/// or neither.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyledRun {
    pub text: String,
    pub colored: bool,
    pub underlined: bool,
}

impl StyledRun {
    /// Create a run with explicit style flags.
    pub fn new(text: impl Into<String>, colored: bool, underlined: bool) -> Self {
        Self {
            text: text.into(),
            colored,
            underlined,
        }
    }

    /// Create an unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, false, false)
    }

    /// Returns `true` if neither flag is set.
    pub fn is_plain(&self) -> bool {
        !self.colored && !self.underlined
    }

    /// Returns `true` if `other` carries the same style flags.
    pub fn same_style(&self, other: &StyledRun) -> bool {
        self.colored == other.colored && self.underlined == other.underlined
    }
}

/// A formatted compiler error: styled runs in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostic {
    runs: Vec<StyledRun>,
}

impl Diagnostic {
    pub fn new(runs: Vec<StyledRun>) -> Self {
        Self { runs }
    }

    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    pub fn into_runs(self) -> Vec<StyledRun> {
        self.runs
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// The diagnostic text with all styling dropped.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

impl From<Vec<StyledRun>> for Diagnostic {
    fn from(runs: Vec<StyledRun>) -> Self {
        Self::new(runs)
    }
}

impl<'a> IntoIterator for &'a Diagnostic {
    type Item = &'a StyledRun;
    type IntoIter = std::slice::Iter<'a, StyledRun>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}

//! Splits diagnostic text on markers and folds the pieces into styled runs.
//!
//! Style state is two flat booleans, not a stack: a reset clears both
//! flags no matter which one was set last, and setting one flag never
//! touches the other. Escape sequences other than the three markers are
//! ordinary text.

use tryout_types::StyledRun;

use crate::marker::Marker;

/// One piece of the split input: a marker or the text between markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'src> {
    Marker(Marker),
    /// Never empty.
    Text(&'src str),
}

/// Iterator over the [`Fragment`]s of a diagnostic string.
pub struct Lexer<'src> {
    source: &'src str,
    /// Current byte offset into `source`. Always on a char boundary.
    pos: usize,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self { source, pos: 0 }
    }

    fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    /// Byte offset (within `rest`) of the first marker after the first char.
    fn next_marker_offset(rest: &str) -> usize {
        rest.char_indices()
            .skip(1)
            .find(|&(i, ch)| ch == '\x1b' && Marker::match_prefix(&rest[i..]).is_some())
            .map_or(rest.len(), |(i, _)| i)
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Fragment<'src>;

    fn next(&mut self) -> Option<Fragment<'src>> {
        let rest = self.rest();
        if rest.is_empty() {
            return None;
        }

        if let Some(marker) = Marker::match_prefix(rest) {
            self.pos += marker.as_str().len();
            return Some(Fragment::Marker(marker));
        }

        let end = Self::next_marker_offset(rest);
        self.pos += end;
        Some(Fragment::Text(&rest[..end]))
    }
}

/// Decode marker-annotated text into styled runs.
///
/// Each text fragment takes the flags in effect when it is reached.
pub fn decode(text: &str) -> Vec<StyledRun> {
    let mut colored = false;
    let mut underlined = false;
    let mut runs = Vec::new();

    for fragment in Lexer::new(text) {
        match fragment {
            Fragment::Marker(Marker::ColorOn) => colored = true,
            Fragment::Marker(Marker::UnderlineOn) => underlined = true,
            Fragment::Marker(Marker::Reset) => {
                colored = false;
                underlined = false;
            }
            Fragment::Text(t) => runs.push(StyledRun::new(t, colored, underlined)),
        }
    }

    runs
}

/// Encode styled runs as marker-annotated text.
///
/// Turning a flag off is only possible through a reset, so a reset is
/// written whenever the next run drops a flag, followed by whichever
/// markers re-enable the flags it keeps. Empty runs are skipped and the
/// output ends in a plain state.
pub fn encode(runs: &[StyledRun]) -> String {
    let mut out = String::new();
    let (mut colored, mut underlined) = (false, false);

    for run in runs.iter().filter(|r| !r.text.is_empty()) {
        if (colored && !run.colored) || (underlined && !run.underlined) {
            out.push_str(Marker::Reset.as_str());
            colored = false;
            underlined = false;
        }
        if run.colored && !colored {
            out.push_str(Marker::ColorOn.as_str());
            colored = true;
        }
        if run.underlined && !underlined {
            out.push_str(Marker::UnderlineOn.as_str());
            underlined = true;
        }
        out.push_str(&run.text);
    }

    if colored || underlined {
        out.push_str(Marker::Reset.as_str());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragments_skip_empty_text() {
        let frags: Vec<_> = Lexer::new("\x1b[31m\x1b[4mab\x1b[0m").collect();
        assert_eq!(
            frags,
            vec![
                Fragment::Marker(Marker::ColorOn),
                Fragment::Marker(Marker::UnderlineOn),
                Fragment::Text("ab"),
                Fragment::Marker(Marker::Reset),
            ]
        );
    }

    #[test]
    fn test_unknown_escape_is_text() {
        let frags: Vec<_> = Lexer::new("\x1b[1mbold\x1b[0m").collect();
        assert_eq!(
            frags,
            vec![
                Fragment::Text("\x1b[1mbold"),
                Fragment::Marker(Marker::Reset),
            ]
        );
    }

    #[test]
    fn test_multibyte_text_between_markers() {
        let frags: Vec<_> = Lexer::new("é\x1b[4m→").collect();
        assert_eq!(
            frags,
            vec![
                Fragment::Text("é"),
                Fragment::Marker(Marker::UnderlineOn),
                Fragment::Text("→"),
            ]
        );
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(&[]), "");
        assert_eq!(encode(&[StyledRun::new("", true, true)]), "");
    }

    #[test]
    fn test_encode_drops_flag_with_reset() {
        let text = encode(&[
            StyledRun::new("a", true, true),
            StyledRun::new("b", true, false),
        ]);
        assert_eq!(text, "\x1b[31m\x1b[4ma\x1b[0m\x1b[31mb\x1b[0m");
    }
}

//! Output rendering.
//!
//! A compiler [`Output`] is first turned into display [`Block`]s, then
//! written to a [`Surface`]. Every render starts from an empty surface;
//! nothing is diffed or reused between updates.

use tryout_types::{FileSet, Output, StyledRun};

/// Class of a generated-file block.
pub const FILE_CLASS: &str = "file";
/// Class of the file name label inside a file block.
pub const FILENAME_CLASS: &str = "filename";
/// Class of the file content inside a file block.
pub const FILE_CONTENT_CLASS: &str = "file-content";
/// Class of the diagnostic block.
pub const ERROR_CLASS: &str = "error";
/// CSS color applied to colored diagnostic runs.
pub const ERROR_COLOR: &str = "red";

/// One top-level block on the output surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A generated file: display name and verbatim content.
    File { label: String, content: String },
    /// A diagnostic: one inline element per run.
    Error { runs: Vec<StyledRun> },
}

/// Inline CSS for one diagnostic run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InlineStyle {
    pub color: Option<&'static str>,
    pub text_decoration: Option<&'static str>,
}

impl InlineStyle {
    pub fn for_run(run: &StyledRun) -> Self {
        Self {
            color: run.colored.then_some(ERROR_COLOR),
            text_decoration: run.underlined.then_some("underline"),
        }
    }
}

/// Where blocks are drawn.
pub trait Surface {
    /// Remove every child.
    fn clear(&mut self);
    fn append(&mut self, block: &Block);
}

/// The blocks for an output, in display order.
pub fn blocks(output: &Output) -> Vec<Block> {
    match output {
        Output::Files(files) => files
            .iter()
            .map(|(name, content)| Block::File {
                label: FileSet::display_name(name),
                content: content.to_string(),
            })
            .collect(),
        Output::Diagnostic(diag) => vec![Block::Error {
            runs: diag.runs().to_vec(),
        }],
    }
}

/// Clear `surface` and draw `output` on it.
pub fn render<S: Surface + ?Sized>(surface: &mut S, output: &Output) {
    surface.clear();
    for block in blocks(output) {
        surface.append(&block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tryout_types::Diagnostic;

    #[test]
    fn test_file_blocks_in_order() {
        let files = [("main", "say hi"), ("load", "say loaded")]
            .into_iter()
            .collect();
        let got = blocks(&Output::Files(files));
        assert_eq!(
            got,
            vec![
                Block::File {
                    label: "main.mcfunction".to_string(),
                    content: "say hi".to_string(),
                },
                Block::File {
                    label: "load.mcfunction".to_string(),
                    content: "say loaded".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_empty_file_set_has_no_blocks() {
        assert!(blocks(&Output::Files(FileSet::new())).is_empty());
    }

    #[test]
    fn test_diagnostic_is_one_block() {
        let runs = vec![StyledRun::new("bad", true, false), StyledRun::plain(" token")];
        let got = blocks(&Output::Diagnostic(Diagnostic::new(runs.clone())));
        assert_eq!(got, vec![Block::Error { runs }]);
    }

    #[test]
    fn test_inline_style() {
        assert_eq!(
            InlineStyle::for_run(&StyledRun::plain("x")),
            InlineStyle::default()
        );
        assert_eq!(
            InlineStyle::for_run(&StyledRun::new("x", true, true)),
            InlineStyle {
                color: Some("red"),
                text_decoration: Some("underline"),
            }
        );
        assert_eq!(
            InlineStyle::for_run(&StyledRun::new("x", false, true)).color,
            None
        );
    }
}

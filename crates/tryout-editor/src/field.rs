//! The editable code field and the two edits the controller makes to it.

use crate::caret::splice_at_caret;

/// A multi-line text field.
///
/// Offsets are UTF-16 code units; heights are CSS pixels.
pub trait CodeField {
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);
    /// Start of the current selection.
    fn caret(&self) -> usize;
    fn set_selection(&mut self, start: usize, end: usize);
    /// Drop any explicit height so the field shrinks to its intrinsic size.
    fn reset_height(&mut self);
    /// Height the content needs without scrolling.
    fn scroll_height(&self) -> i32;
    fn set_height(&mut self, px: i32);
}

/// Resize the field to fit its content.
///
/// The reset comes first so the field can also shrink.
pub fn auto_grow(field: &mut impl CodeField) {
    field.reset_height();
    let height = field.scroll_height();
    field.set_height(height);
}

/// Insert `insert` at the caret and leave a collapsed caret after it.
pub fn insert_at_caret(field: &mut impl CodeField, insert: &str) {
    let (text, caret) = splice_at_caret(&field.text(), field.caret(), insert);
    field.set_text(&text);
    field.set_selection(caret, caret);
}

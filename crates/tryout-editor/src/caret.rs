//! Text insertion at a caret offset.
//!
//! Offsets are UTF-16 code units, the unit browsers use for
//! `selectionStart`. They are mapped onto char boundaries before slicing:
//! past-the-end clamps to the end, and an offset inside a surrogate pair
//! snaps back to the start of that character.

/// Spaces inserted for one Tab press.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// The indent string for a tab width.
pub fn indent(width: usize) -> String {
    " ".repeat(width)
}

/// Byte offset of the char boundary at or before a UTF-16 offset.
fn byte_offset(text: &str, utf16_offset: usize) -> usize {
    let mut units = 0;
    for (idx, ch) in text.char_indices() {
        let next = units + ch.len_utf16();
        if next > utf16_offset {
            return idx;
        }
        units = next;
    }
    text.len()
}

/// Insert `insert` at `caret`, returning the new text and the collapsed
/// caret just past the insertion (both in UTF-16 units).
pub fn splice_at_caret(text: &str, caret: usize, insert: &str) -> (String, usize) {
    let at = byte_offset(text, caret);
    let (before, after) = text.split_at(at);

    let mut out = String::with_capacity(text.len() + insert.len());
    out.push_str(before);
    out.push_str(insert);
    out.push_str(after);

    let new_caret = before.encode_utf16().count() + insert.encode_utf16().count();
    (out, new_caret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent() {
        assert_eq!(indent(4), "    ");
        assert_eq!(indent(0), "");
    }

    #[test]
    fn test_byte_offset_ascii() {
        assert_eq!(byte_offset("abc", 0), 0);
        assert_eq!(byte_offset("abc", 2), 2);
        assert_eq!(byte_offset("abc", 3), 3);
        assert_eq!(byte_offset("abc", 9), 3);
    }

    #[test]
    fn test_byte_offset_non_ascii() {
        // 'é' is 2 bytes / 1 unit, '😀' is 4 bytes / 2 units.
        let text = "é😀x";
        assert_eq!(byte_offset(text, 1), 2);
        assert_eq!(byte_offset(text, 2), 2);
        assert_eq!(byte_offset(text, 3), 6);
        assert_eq!(byte_offset(text, 4), 7);
    }
}

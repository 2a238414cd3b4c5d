//! Text decoding and filtering

use crate::classifier::{is_pictogram_with, PictogramCallback};

/// Decode UTF-8, silently dropping byte sequences that are not valid UTF-8.
///
/// Nothing is substituted for the dropped bytes, so a decode error never
/// shows up as a character in the result.
pub fn decode_permissive(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;

    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                out.push_str(valid);
                break;
            }
            Err(e) => {
                let (valid, after) = rest.split_at(e.valid_up_to());
                if let Ok(valid) = std::str::from_utf8(valid) {
                    out.push_str(valid);
                }
                match e.error_len() {
                    Some(len) => rest = &after[len..],
                    // Incomplete sequence at end of input
                    None => break,
                }
            }
        }
    }

    out
}

/// Remove every pictogram from `text`, keeping the order of everything else
pub fn strip_pictograms(text: &str, on_pictogram: PictogramCallback<'_>) -> String {
    text.chars()
        .filter(|&ch| !is_pictogram_with(ch, on_pictogram))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_utf8() {
        let text = "plain ascii, caf\u{e9}, \u{4E2D}\u{6587}, \u{1F600}";
        assert_eq!(decode_permissive(text.as_bytes()), text);
    }

    #[test]
    fn test_decode_drops_invalid_bytes() {
        let bytes = b"ab\xFFcd\xC3\x28ef";
        assert_eq!(decode_permissive(bytes), "abcd(ef");
    }

    #[test]
    fn test_decode_drops_truncated_tail() {
        // First two bytes of a four-byte sequence
        let bytes = b"hello\xF0\x9F";
        assert_eq!(decode_permissive(bytes), "hello");
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode_permissive(b""), "");
    }

    #[test]
    fn test_strip_removes_symbols_in_order() {
        let text = "Hello \u{263A} World \u{1F680}!";
        assert_eq!(strip_pictograms(text, None), "Hello  World !");
    }

    #[test]
    fn test_strip_keeps_box_drawings_and_arrows() {
        let text = "\u{250C}\u{2500}\u{2510} \u{2190} \u{00A9}";
        assert_eq!(strip_pictograms(text, None), "\u{250C}\u{2500}\u{2510} \u{2190} ");
    }

    #[test]
    fn test_strip_is_idempotent() {
        let text = "a\u{2600}b\u{2500}c\u{1F1EF}\u{1F1F5}d\u{1F3FB}e\u{00AE}\n";
        let once = strip_pictograms(text, None);
        let twice = strip_pictograms(&once, None);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_strip_reports_each_removed_character() {
        use std::cell::Cell;

        let count = Cell::new(0usize);
        let on_pictogram = |_: &crate::classifier::Classification| count.set(count.get() + 1);

        let cleaned = strip_pictograms("\u{00A9}x\u{00A9}y\u{2500}", Some(&on_pictogram));
        assert_eq!(cleaned, "xy\u{2500}");
        assert_eq!(count.get(), 2);
    }
}

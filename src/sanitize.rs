pub const MAX_INTEGER_DIGITS: usize = 8;
pub const MAX_FRACTION_DIGITS: usize = 1;

// no negatives, no exponent notation
pub const REJECTED_KEYS: [&str; 2] = ["-", "e"];

pub fn is_rejected_key(key: &str) -> bool {
    REJECTED_KEYS.contains(&key)
}

pub fn sanitize_input(raw: &str) -> String {
    let filtered: String = raw
        .chars()
        .map(|c| if c == ',' { '.' } else { c })
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let collapsed = collapse_leading_zeros(&filtered);
    let mut parts = collapsed.split('.');
    let integer = parts.next().unwrap_or_default();
    let fraction = parts.next();

    let mut out: String = integer.chars().take(MAX_INTEGER_DIGITS).collect();
    if let Some(fraction) = fraction {
        out.push('.');
        out.extend(fraction.chars().take(MAX_FRACTION_DIGITS));
    }
    if out == "." {
        return "0.".to_string();
    }
    out
}

// "007" -> "7", "000" -> "0", "00." -> "0."; input is ASCII digits and points only.
fn collapse_leading_zeros(text: &str) -> &str {
    let zeros = text.bytes().take_while(|b| *b == b'0').count();
    if zeros == 0 {
        return text;
    }
    match text.as_bytes().get(zeros) {
        Some(b) if b.is_ascii_digit() => &text[zeros..],
        _ => &text[zeros - 1..],
    }
}

/// Caret position after the input was rewritten from `old_text` to `new_text`.
///
/// Both carets count `char`s, not UTF-16 units. The caret shifts by the length
/// delta the rewrite introduced and stays inside the new text.
pub fn adjust_caret(old_text: &str, old_caret: usize, new_text: &str) -> usize {
    if old_text == new_text {
        return old_caret;
    }
    let old_len = old_text.chars().count() as isize;
    let new_len = new_text.chars().count() as isize;
    let moved = old_caret as isize + (new_len - old_len);
    moved.clamp(0, new_len) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_stray_characters_and_normalizes_comma() {
        assert_eq!(sanitize_input("1a2b,5"), "12.5");
        assert_eq!(sanitize_input("  42 L"), "42");
        assert_eq!(sanitize_input(""), "");
    }

    #[test]
    fn sanitize_collapses_leading_zeros() {
        assert_eq!(sanitize_input("007"), "7");
        assert_eq!(sanitize_input("000"), "0");
        assert_eq!(sanitize_input("0"), "0");
        assert_eq!(sanitize_input("0.5"), "0.5");
        assert_eq!(sanitize_input("00.5"), "0.5");
        assert_eq!(sanitize_input("007.89"), "7.8");
    }

    #[test]
    fn sanitize_keeps_first_point_only() {
        assert_eq!(sanitize_input("1.2.3"), "1.2");
        assert_eq!(sanitize_input("1..5"), "1.");
        assert_eq!(sanitize_input("3,4,5"), "3.4");
    }

    #[test]
    fn sanitize_caps_integer_and_fraction() {
        assert_eq!(sanitize_input("1234567890"), "12345678");
        assert_eq!(sanitize_input("123456789.99"), "12345678.9");
        assert_eq!(sanitize_input("12."), "12.");
    }

    #[test]
    fn sanitize_rewrites_bare_point() {
        assert_eq!(sanitize_input("."), "0.");
        assert_eq!(sanitize_input(","), "0.");
        assert_eq!(sanitize_input(".5"), ".5");
        assert_eq!(sanitize_input(".."), "0.");
        assert_eq!(sanitize_input(",,"), "0.");
        assert_eq!(sanitize_input("..."), "0.");
        assert_eq!(sanitize_input("a.,b"), "0.");
    }

    #[test]
    fn sanitize_is_idempotent() {
        for raw in [
            "..", ",,", "...", ".", "007.89", "1..5", "1.2.3", "00.", "000", "abc",
            "123456789.99", ".5", "0,0,7", " 4 2 ", "",
        ] {
            let once = sanitize_input(raw);
            assert_eq!(sanitize_input(&once), once, "raw {raw:?}");
        }
    }

    #[test]
    fn sanitize_is_stable_on_canonical_text() {
        for text in ["0", "0.", "7", "7.8", "12345678.9", ""] {
            assert_eq!(sanitize_input(text), text);
        }
    }

    #[test]
    fn caret_follows_removed_characters() {
        // "12a3" with caret after 'a'
        assert_eq!(adjust_caret("12a3", 3, "123"), 2);
        assert_eq!(adjust_caret("007", 3, "7"), 1);
        assert_eq!(adjust_caret("abc", 1, ""), 0);
    }

    #[test]
    fn caret_counts_chars() {
        // caret right after the emoji is char index 2
        assert_eq!(adjust_caret("1😀2", 2, "12"), 1);
    }

    #[test]
    fn caret_moves_forward_when_text_grows() {
        assert_eq!(adjust_caret(".", 1, "0."), 2);
    }

    #[test]
    fn caret_untouched_when_text_unchanged() {
        assert_eq!(adjust_caret("12.5", 2, "12.5"), 2);
    }

    #[test]
    fn rejected_keys() {
        assert!(is_rejected_key("-"));
        assert!(is_rejected_key("e"));
        assert!(!is_rejected_key("5"));
        assert!(!is_rejected_key(","));
        assert!(!is_rejected_key("Backspace"));
    }
}

use std::borrow::Cow;
use unicode_normalization::{is_nfc_quick, IsNormalized, UnicodeNormalization};

#[inline]
fn already_composed(string: &str) -> bool {
    is_nfc_quick(string.chars()) == IsNormalized::Yes
}

#[inline(never)]
fn do_compose(string: &str) -> String {
    string.nfc().collect()
}

/// Compose to NFC, borrowing when the input is already composed.
pub fn compose(string: &str) -> Cow<'_, str> {
    if already_composed(string) {
        Cow::Borrowed(string)
    } else {
        Cow::Owned(do_compose(string))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrowed_when_composed() {
        assert!(matches!(compose("Zoë"), Cow::Borrowed(_)));
        assert!(matches!(compose("Zoe\u{308}"), Cow::Owned(_)));
        assert_eq!("Zoë", compose("Zoe\u{308}"));
    }
}

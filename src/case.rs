use std::borrow::Cow;

#[derive(Debug)]
enum CaseMapping {
    Empty,
    Single(char),
    Double(char, char),
    Triple(char, char, char),
}

impl CaseMapping {
    #[inline]
    fn titlecase(c: char) -> CaseMapping {
        let [x, y, z] = unicode_case_mapping::to_titlecase(c);
        Self::from_u32(x, y, z)
    }

    // The case mapping tables pad with zero
    #[inline]
    fn from_u32(x: u32, y: u32, z: u32) -> CaseMapping {
        let valid = |c: u32| if c > 0 { char::from_u32(c) } else { None };

        match (valid(x), valid(y), valid(z)) {
            (Some(x), Some(y), Some(z)) => CaseMapping::Triple(x, y, z),
            (Some(x), Some(y), None) => CaseMapping::Double(x, y),
            (Some(x), None, _) => CaseMapping::Single(x),
            _ => CaseMapping::Empty,
        }
    }
}

impl Iterator for CaseMapping {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        match *self {
            CaseMapping::Triple(x, y, z) => {
                *self = CaseMapping::Double(y, z);
                Some(x)
            }
            CaseMapping::Double(x, y) => {
                *self = CaseMapping::Single(y);
                Some(x)
            }
            CaseMapping::Single(x) => {
                *self = CaseMapping::Empty;
                Some(x)
            }
            CaseMapping::Empty => None,
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = match self {
            CaseMapping::Triple(_, _, _) => 3,
            CaseMapping::Double(_, _) => 2,
            CaseMapping::Single(_) => 1,
            CaseMapping::Empty => 0,
        };
        (size, Some(size))
    }
}

impl ExactSizeIterator for CaseMapping {}

#[inline]
fn push_titlecase(result: &mut String, c: char) {
    let mapped = CaseMapping::titlecase(c);
    if mapped.len() > 0 {
        result.extend(mapped);
    } else {
        // No titlecase mapping
        result.push(c);
    }
}

/// Titlecase the first character of the text, leaving the rest alone.
pub fn capitalize_first(text: &str) -> Cow<'_, str> {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii() && !c.is_ascii_lowercase() => Cow::Borrowed(text),
        Some(c) => {
            let mut result = String::with_capacity(text.len() + 2);
            push_titlecase(&mut result, c);
            result.push_str(chars.as_str());
            Cow::Owned(result)
        }
        None => Cow::Borrowed(text),
    }
}

/// Titlecase the first character of every whitespace-separated word.
///
/// `at_word_start` carries word boundaries across consecutive calls, so text
/// split over several pieces capitalizes as if it were one string.
pub fn capitalize_words(text: &str, at_word_start: &mut bool) -> String {
    let mut result = String::with_capacity(text.len());

    for c in text.chars() {
        if c.is_whitespace() {
            result.push(c);
            *at_word_start = true;
        } else if *at_word_start {
            push_titlecase(&mut result, c);
            *at_word_start = false;
        } else {
            result.push(c);
        }
    }

    result
}

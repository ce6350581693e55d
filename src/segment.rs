use super::composition::compose;
use std::borrow::Cow;
use std::iter::Peekable;
use unicode_segmentation::{UWordBoundIndices, UnicodeSegmentation};

/// Words of a piece of text, together with their byte offsets into it.
///
/// Words are found by unicode word segmentation, the same way for every
/// script. Segments without any alphanumeric character (spaces,
/// punctuation, the Ethiopic wordspace) separate words, except that a single
/// hyphen or apostrophe between two segments joins them, so `Mary-Jane`,
/// `Анна-Мария` and `O’Brien` are each one word.
pub struct WordIndices<'a> {
    text: &'a str,
    segments: Peekable<UWordBoundIndices<'a>>,
}

impl<'a> WordIndices<'a> {
    pub fn new(text: &'a str) -> WordIndices<'a> {
        WordIndices {
            text,
            segments: text.split_word_bound_indices().peekable(),
        }
    }
}

impl<'a> Iterator for WordIndices<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<(usize, &'a str)> {
        let (start, first) = self
            .segments
            .by_ref()
            .find(|(_, segment)| has_alphanumeric(segment))?;
        let mut end = start + first.len();

        while let Some(&(_, joiner)) = self.segments.peek() {
            if !is_joiner(joiner) {
                break;
            }
            // A joiner not followed by a word is skipped like other punctuation
            self.segments.next();
            match self.segments.peek() {
                Some(&(next_start, next)) if has_alphanumeric(next) => {
                    end = next_start + next.len();
                    self.segments.next();
                }
                _ => break,
            }
        }

        Some((start, &self.text[start..end]))
    }
}

/// The words of a piece of text, in order. See [`WordIndices`] for the
/// segmentation rules.
pub struct Words<'a>(WordIndices<'a>);

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<&'a str> {
        self.0.next().map(|(_, word)| word)
    }
}

/// Split text into words.
///
/// # Examples
/// ```
/// use name_format::split;
///
/// let words: Vec<&str> = split("  Jean-Luc  Νίκος ሰላም፡ዓለም ").collect();
/// assert_eq!(vec!["Jean-Luc", "Νίκος", "ሰላም", "ዓለም"], words);
/// assert_eq!(0, split(" \t ").count());
/// ```
pub fn split(text: &str) -> Words<'_> {
    Words(WordIndices::new(text))
}

/// The first logical character of each word, concatenated.
///
/// Characters are taken by grapheme cluster, so combining marks stay with
/// their base, and composed to NFC where Unicode has a precomposed form.
///
/// # Examples
/// ```
/// use name_format::initials;
///
/// assert_eq!("JRRT", initials("John Ronald Reuel Tolkien"));
/// assert_eq!("ФМД", initials("Фёдор Михайлович Достоевский"));
/// assert_eq!("", initials("   "));
/// ```
pub fn initials(text: &str) -> String {
    let mut result = String::new();
    for word in split(text) {
        if let Some(grapheme) = leading_grapheme(word) {
            result.push_str(&compose(grapheme));
        }
    }
    result
}

/// The first logical character of the first word, if there is one.
pub fn first_character(text: &str) -> Option<Cow<'_, str>> {
    split(text).next().and_then(leading_grapheme).map(compose)
}

#[inline]
fn leading_grapheme(word: &str) -> Option<&str> {
    word.graphemes(true).find(|g| has_alphanumeric(g))
}

#[inline]
fn is_joiner(segment: &str) -> bool {
    matches!(segment, "-" | "'" | "\u{2010}" | "\u{2011}" | "\u{2019}")
}

#[inline]
fn has_alphanumeric(text: &str) -> bool {
    text.chars().any(char::is_alphanumeric)
}

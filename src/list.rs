use compact_str::CompactString;
use smallvec::SmallVec;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// What joins the last name of a list to the others.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "lowercase"))]
pub enum Conjunction {
    /// The configured `and_text`
    #[default]
    Text,
    /// An ampersand
    Symbol,
    /// Just the delimiter
    None,
}

/// Whether the delimiter also appears before the conjunction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "lowercase"))]
pub enum DelimiterPrecedesLast {
    Never,
    Always,
    /// Only for lists of three or more
    #[default]
    Contextual,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct ListSettings {
    pub delimiter: CompactString,
    pub and: Conjunction,
    pub and_text: CompactString,
    pub delimiter_precedes_last: DelimiterPrecedesLast,
    /// Lists longer than this are abbreviated; zero never abbreviates.
    pub et_al_min: usize,
    /// How many names an abbreviated list keeps.
    pub et_al_first: usize,
    pub et_al_text: CompactString,
}

impl Default for ListSettings {
    fn default() -> ListSettings {
        ListSettings {
            delimiter: ", ".into(),
            and: Conjunction::Text,
            and_text: "and".into(),
            delimiter_precedes_last: DelimiterPrecedesLast::Contextual,
            et_al_min: 0,
            et_al_first: 1,
            et_al_text: "et al.".into(),
        }
    }
}

/// Join names that have already been rendered into a single list. Blank
/// names are skipped.
///
/// # Examples
/// ```
/// use name_format::{format_list, Conjunction, ListSettings};
///
/// let settings = ListSettings::default();
/// assert_eq!("Ada Lovelace", format_list(&["Ada Lovelace"], &settings));
/// assert_eq!("Ada and Grace", format_list(&["Ada", "Grace"], &settings));
/// assert_eq!("Ada, Grace, and Hedy", format_list(&["Ada", "Grace", "Hedy"], &settings));
///
/// let settings = ListSettings { and: Conjunction::Symbol, et_al_min: 3, ..ListSettings::default() };
/// assert_eq!("Ada, Grace, & Hedy", format_list(&["Ada", "Grace", "Hedy"], &settings));
/// assert_eq!("Ada et al.", format_list(&["Ada", "Grace", "Hedy", "Mary"], &settings));
/// ```
pub fn format_list<S: AsRef<str>>(names: &[S], settings: &ListSettings) -> String {
    let names: SmallVec<[&str; 8]> = names
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| !name.trim().is_empty())
        .collect();

    if names.len() <= 1 {
        return names.first().map(|name| name.to_string()).unwrap_or_default();
    }

    let delimiter = settings.delimiter.as_str();

    if settings.et_al_min > 0 && names.len() > settings.et_al_min {
        let shown = &names[..settings.et_al_first.clamp(1, names.len())];
        let mut result = shown.join(delimiter);
        if shown.len() > 1 {
            push_delimiter(&mut result, delimiter);
        } else {
            result.push(' ');
        }
        result.push_str(&settings.et_al_text);
        return result;
    }

    let conjunction = match settings.and {
        Conjunction::Text => settings.and_text.as_str(),
        Conjunction::Symbol => "&",
        Conjunction::None => return names.join(delimiter),
    };

    let (last, init) = match names.split_last() {
        Some(split) => split,
        None => return String::new(),
    };

    let precedes = match settings.delimiter_precedes_last {
        DelimiterPrecedesLast::Never => false,
        DelimiterPrecedesLast::Always => true,
        DelimiterPrecedesLast::Contextual => names.len() > 2,
    };

    let mut result = init.join(delimiter);
    if precedes {
        push_delimiter(&mut result, delimiter);
    } else {
        result.push(' ');
    }
    result.push_str(conjunction);
    result.push(' ');
    result.push_str(last);
    result
}

// The delimiter, with exactly one space after it
fn push_delimiter(result: &mut String, delimiter: &str) {
    result.push_str(delimiter.trim_end());
    result.push(' ');
}

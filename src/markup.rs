use super::error::Error;
use super::record::Key;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// How rendered name components are presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "lowercase"))]
pub enum Markup {
    /// Text is passed through untouched.
    #[default]
    None,
    /// Text is passed through untouched; for callers that escape elsewhere.
    Raw,
    /// Components are escaped and wrapped in a `<span>` whose class is the
    /// component name.
    Wrapped,
}

impl Markup {
    pub fn as_str(self) -> &'static str {
        match self {
            Markup::None => "none",
            Markup::Raw => "raw",
            Markup::Wrapped => "wrapped",
        }
    }
}

impl FromStr for Markup {
    type Err = Error;

    fn from_str(s: &str) -> Result<Markup, Error> {
        match s {
            "none" => Ok(Markup::None),
            "raw" => Ok(Markup::Raw),
            "wrapped" => Ok(Markup::Wrapped),
            _ => Err(Error::UnknownMarkup(s.to_string())),
        }
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Escape the characters that are significant in HTML text and attributes.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Present the rendered text of a single name component.
///
/// # Examples
/// ```
/// use name_format::{wrap, Key, Markup};
///
/// assert_eq!("O'Neil", wrap("O'Neil", Key::Family, Markup::Raw));
/// assert_eq!(
///     "<span class=\"family\">O&#39;Neil</span>",
///     wrap("O'Neil", Key::Family, Markup::Wrapped)
/// );
/// ```
pub fn wrap(text: &str, key: Key, markup: Markup) -> Cow<'_, str> {
    match markup {
        Markup::None | Markup::Raw => Cow::Borrowed(text),
        Markup::Wrapped => Cow::Owned(wrap_escaped(&escape_html(text), key)),
    }
}

/// Wrap text that has already been escaped.
pub(crate) fn wrap_escaped(escaped: &str, key: Key) -> String {
    format!("<span class=\"{}\">{}</span>", key.as_str(), escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escaping() {
        assert!(matches!(escape_html("Zoë Smith"), Cow::Borrowed(_)));
        assert_eq!("&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;", escape_html("<b>Tom & Jerry</b>"));
        assert_eq!("&quot;Bud&quot;", escape_html("\"Bud\""));
    }

    #[test]
    fn modes() {
        assert_eq!("<i>", wrap("<i>", Key::Given, Markup::None));
        assert_eq!("<i>", wrap("<i>", Key::Given, Markup::Raw));
        assert_eq!(
            "<span class=\"given\">&lt;i&gt;</span>",
            wrap("<i>", Key::Given, Markup::Wrapped)
        );
    }

    #[test]
    fn parse_modes() {
        assert_eq!(Markup::Wrapped, "wrapped".parse().unwrap());
        assert_eq!(Markup::None, Markup::default());
        assert!("simple".parse::<Markup>().is_err());
    }
}

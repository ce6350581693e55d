use super::markup::Markup;
use super::token::Separator;
use compact_str::CompactString;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// Per-render settings: the three separators a pattern can refer to with
/// `i`, `j` and `k`, and the markup mode.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct Settings {
    pub sep1: CompactString,
    pub sep2: CompactString,
    pub sep3: CompactString,
    pub markup: Markup,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            sep1: " ".into(),
            sep2: ", ".into(),
            sep3: "".into(),
            markup: Markup::None,
        }
    }
}

impl Settings {
    pub fn with_markup(mut self, markup: Markup) -> Settings {
        self.markup = markup;
        self
    }

    pub fn separator(&self, separator: Separator) -> &str {
        match separator {
            Separator::First => &self.sep1,
            Separator::Second => &self.sep2,
            Separator::Third => &self.sep3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert_eq!(" ", settings.separator(Separator::First));
        assert_eq!(", ", settings.separator(Separator::Second));
        assert_eq!("", settings.separator(Separator::Third));
        assert_eq!(Markup::None, settings.markup);
    }

    #[cfg(feature = "serialization")]
    #[test]
    fn partial_json() {
        let settings: Settings = serde_json::from_str(r#"{"sep2": " - ", "markup": "wrapped"}"#).unwrap();
        assert_eq!(" ", settings.sep1.as_str());
        assert_eq!(" - ", settings.sep2.as_str());
        assert_eq!(Markup::Wrapped, settings.markup);
    }
}

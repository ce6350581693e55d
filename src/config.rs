use super::error::{Error, Result};
use super::formats::builtin_format;
use super::list::ListSettings;
use super::pattern::Pattern;
use super::settings::Settings;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Settings, named formats and list settings, as loaded from JSON.
///
/// Every section is optional. Named formats override the built-in ones.
///
/// # Examples
/// ```
/// use name_format::{Config, Key, Markup, NameRecord};
///
/// let config = Config::from_json(r#"{
///     "settings": { "sep2": " / ", "markup": "raw" },
///     "formats": { "catalog": "f+jg" }
/// }"#).unwrap();
///
/// let record = NameRecord::new().with(Key::Given, "Ada").with(Key::Family, "Lovelace");
/// let pattern = config.pattern("catalog").unwrap();
/// assert_eq!("Lovelace / Ada", pattern.render(&record, &config.settings));
/// assert_eq!(Markup::Raw, config.settings.markup);
///
/// assert!(config.pattern("formal").is_ok());
/// assert!(config.pattern("nonexistent").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub settings: Settings,
    pub formats: BTreeMap<CompactString, Pattern>,
    pub list: ListSettings,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Config> {
        let config: Config = serde_json::from_str(json)?;
        debug!(formats = config.formats.len(), "loaded name format configuration");
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading name format configuration");
        let json = fs::read_to_string(path)?;
        Config::from_json(&json)
    }

    /// The named format, from this configuration or the built-ins.
    pub fn pattern(&self, name: &str) -> Result<Cow<'_, Pattern>> {
        if let Some(pattern) = self.formats.get(name) {
            Ok(Cow::Borrowed(pattern))
        } else if let Some(pattern) = builtin_format(name) {
            Ok(Cow::Owned(Pattern::compile(pattern)))
        } else {
            Err(Error::UnknownFormat(name.to_string()))
        }
    }
}

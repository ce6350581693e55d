use super::error::Error;
use compact_str::CompactString;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// The components a name record can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Title,
    Given,
    Middle,
    Family,
    Generational,
    Credentials,
    Preferred,
    Alternative,
}

static KEYS_BY_NAME: phf::Map<&'static str, Key> = phf::phf_map! {
    "title" => Key::Title,
    "given" => Key::Given,
    "middle" => Key::Middle,
    "family" => Key::Family,
    "generational" => Key::Generational,
    "credentials" => Key::Credentials,
    "preferred" => Key::Preferred,
    "alternative" => Key::Alternative,
};

impl Key {
    pub const ALL: [Key; 8] = [
        Key::Title,
        Key::Given,
        Key::Middle,
        Key::Family,
        Key::Generational,
        Key::Credentials,
        Key::Preferred,
        Key::Alternative,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Key::Title => "title",
            Key::Given => "given",
            Key::Middle => "middle",
            Key::Family => "family",
            Key::Generational => "generational",
            Key::Credentials => "credentials",
            Key::Preferred => "preferred",
            Key::Alternative => "alternative",
        }
    }
}

impl FromStr for Key {
    type Err = Error;

    fn from_str(s: &str) -> Result<Key, Error> {
        KEYS_BY_NAME
            .get(s)
            .copied()
            .ok_or_else(|| Error::UnknownComponent(s.to_string()))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The components of one person's name, as supplied by the caller.
///
/// Absent and whitespace-only components are both treated as empty when
/// rendering; values are never modified.
///
/// # Examples
/// ```
/// use name_format::{Key, NameRecord};
///
/// let record = NameRecord::new()
///     .with(Key::Given, "Ada")
///     .with(Key::Family, "Lovelace");
///
/// assert_eq!(Some("Ada"), record.get(Key::Given));
/// assert_eq!(None, record.get(Key::Middle));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(default))]
pub struct NameRecord {
    #[cfg_attr(feature = "serialization", serde(skip_serializing_if = "Option::is_none"))]
    pub title: Option<CompactString>,
    #[cfg_attr(feature = "serialization", serde(skip_serializing_if = "Option::is_none"))]
    pub given: Option<CompactString>,
    #[cfg_attr(feature = "serialization", serde(skip_serializing_if = "Option::is_none"))]
    pub middle: Option<CompactString>,
    #[cfg_attr(feature = "serialization", serde(skip_serializing_if = "Option::is_none"))]
    pub family: Option<CompactString>,
    #[cfg_attr(feature = "serialization", serde(skip_serializing_if = "Option::is_none"))]
    pub generational: Option<CompactString>,
    #[cfg_attr(feature = "serialization", serde(skip_serializing_if = "Option::is_none"))]
    pub credentials: Option<CompactString>,
    #[cfg_attr(feature = "serialization", serde(skip_serializing_if = "Option::is_none"))]
    pub preferred: Option<CompactString>,
    #[cfg_attr(feature = "serialization", serde(skip_serializing_if = "Option::is_none"))]
    pub alternative: Option<CompactString>,
}

impl NameRecord {
    pub fn new() -> NameRecord {
        NameRecord::default()
    }

    pub fn with(mut self, key: Key, value: impl Into<CompactString>) -> NameRecord {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: Key, value: impl Into<CompactString>) {
        *self.slot_mut(key) = Some(value.into());
    }

    pub fn clear(&mut self, key: Key) {
        *self.slot_mut(key) = None;
    }

    /// The raw value of a component, exactly as supplied.
    pub fn get(&self, key: Key) -> Option<&str> {
        let slot = match key {
            Key::Title => &self.title,
            Key::Given => &self.given,
            Key::Middle => &self.middle,
            Key::Family => &self.family,
            Key::Generational => &self.generational,
            Key::Credentials => &self.credentials,
            Key::Preferred => &self.preferred,
            Key::Alternative => &self.alternative,
        };
        slot.as_deref()
    }

    /// The trimmed value of a component, or `None` if it is absent or blank.
    pub fn value(&self, key: Key) -> Option<&str> {
        self.get(key).map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        Key::ALL.iter().all(|&key| self.value(key).is_none())
    }

    /// Build a record from component names and values, e.g. the columns of
    /// a stored row.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<NameRecord, Error>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut record = NameRecord::new();
        for (name, value) in pairs {
            record.set(name.parse()?, value);
        }
        Ok(record)
    }

    fn slot_mut(&mut self, key: Key) -> &mut Option<CompactString> {
        match key {
            Key::Title => &mut self.title,
            Key::Given => &mut self.given,
            Key::Middle => &mut self.middle,
            Key::Family => &mut self.family,
            Key::Generational => &mut self.generational,
            Key::Credentials => &mut self.credentials,
            Key::Preferred => &mut self.preferred,
            Key::Alternative => &mut self.alternative,
        }
    }
}

impl<S: Into<CompactString>> FromIterator<(Key, S)> for NameRecord {
    fn from_iter<I: IntoIterator<Item = (Key, S)>>(iter: I) -> NameRecord {
        let mut record = NameRecord::new();
        for (key, value) in iter {
            record.set(key, value);
        }
        record
    }
}

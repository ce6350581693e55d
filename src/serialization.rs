use super::pattern::Pattern;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// Patterns serialize as their source text.
impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.source())
    }
}

/// Patterns deserialize from source text, compiling as they go.
impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Pattern, D::Error> {
        let source = String::deserialize(deserializer)?;
        Ok(Pattern::compile(&source))
    }
}

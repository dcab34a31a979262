//! Document root and library extension blocks

use serde::{Deserialize, Serialize};

use super::media::Media;

/// One parsed NFO document
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct NfoRoot {
    #[prost(message, optional, tag = "1")]
    pub media: Option<Media>,
    #[prost(message, repeated, tag = "2")]
    pub library: Vec<LibraryMetadata>,
}

impl NfoRoot {
    /// Root holding a single media payload
    pub fn with_media(media: impl Into<Media>) -> Self {
        Self {
            media: Some(media.into()),
            library: Vec::new(),
        }
    }

    /// Collapse repeated library keys the way [`LibraryMetadata::insert`] would
    pub fn normalize(&mut self) {
        for library in &mut self.library {
            library.normalize();
        }
    }
}

/// Vendor/extension key-value bag tagged with a `type`
///
/// Properties keep their first-appearance order. Encoded as repeated
/// `{key = 1, value = 2}` entries, which is the same wire layout as a proto3
/// `map<string, string>`.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryMetadata {
    #[prost(string, tag = "1")]
    pub r#type: String,
    #[prost(message, repeated, tag = "2")]
    pub properties: Vec<Property>,
}

#[derive(Clone, PartialEq, Eq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Property {
    #[prost(string, tag = "1")]
    pub key: String,
    #[prost(string, tag = "2")]
    pub value: String,
}

impl LibraryMetadata {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            r#type: kind.into(),
            properties: Vec::new(),
        }
    }

    /// Set `key` to `value`; an existing key is overwritten in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.properties.iter_mut().find(|p| p.key == key) {
            Some(existing) => existing.value = value,
            None => self.properties.push(Property { key, value }),
        }
    }

    /// Re-insert every property so repeated keys collapse (last value, first position)
    pub fn normalize(&mut self) {
        let properties = std::mem::take(&mut self.properties);
        for property in properties {
            self.insert(property.key, property.value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|p| (p.key.as_str(), p.value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_last_write_wins_keeps_position() {
        let mut lib = LibraryMetadata::new("kodi");
        lib.insert("playcount", "1");
        lib.insert("lastplayed", "2024-01-01");
        lib.insert("playcount", "3");

        assert_eq!(lib.len(), 2);
        assert_eq!(lib.get("playcount"), Some("3"));
        let keys: Vec<&str> = lib.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["playcount", "lastplayed"]);
    }

    #[test]
    fn test_normalize_collapses_repeated_keys() {
        let mut lib = LibraryMetadata::new("kodi");
        let prop = |key: &str, value: &str| Property {
            key: key.to_string(),
            value: value.to_string(),
        };
        lib.properties = vec![prop("a", "1"), prop("b", "2"), prop("a", "3")];
        lib.normalize();

        let pairs: Vec<(&str, &str)> = lib.iter().collect();
        assert_eq!(pairs, vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_get_missing_key() {
        let lib = LibraryMetadata::new("plex");
        assert!(lib.is_empty());
        assert_eq!(lib.get("anything"), None);
    }
}

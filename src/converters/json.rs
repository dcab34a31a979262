//! JSON rendering of NFO records
//!
//! Field names follow the record model (`original_title`, `unique_ids`, ...);
//! the media union is written as `{"kind": {"movie": {...}}}`.

use super::errors::Result;
use crate::models::NfoRoot;

pub fn record_to_json(root: &NfoRoot) -> Result<String> {
    Ok(serde_json::to_string_pretty(root)?)
}

/// Parse JSON; repeated library keys collapse, last value wins
pub fn json_to_record(json: &str) -> Result<NfoRoot> {
    let mut root: NfoRoot = serde_json::from_str(json)?;
    root.normalize();
    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::errors::ConvertError;
    use crate::models::*;

    #[test]
    fn test_json_round_trip() {
        let mut lib = LibraryMetadata::new("jellyfin");
        lib.insert("id", "abc");
        let root = NfoRoot {
            media: Some(
                Anime {
                    title: "Mushishi".to_string(),
                    r#type: "TV".to_string(),
                    ..Default::default()
                }
                .into(),
            ),
            library: vec![lib],
        };

        let json = record_to_json(&root).unwrap();
        assert!(json.contains("\"anime\""));
        assert!(json.contains("\"type\": \"TV\""));
        assert_eq!(json_to_record(&json).unwrap(), root);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let root = json_to_record(r#"{"media": {"kind": {"movie": {"title": "Heat"}}}}"#).unwrap();
        let movie = root.media.unwrap().movie().cloned().unwrap();
        assert_eq!(movie.title, "Heat");
        assert_eq!(movie.year, 0);
        assert!(movie.genres.is_empty());
    }

    #[test]
    fn test_repeated_library_keys_collapse() {
        let json = r#"{"library": [{"type": "kodi", "properties": [
            {"key": "playcount", "value": "1"},
            {"key": "watched", "value": "true"},
            {"key": "playcount", "value": "2"}
        ]}]}"#;
        let root = json_to_record(json).unwrap();
        let pairs: Vec<(&str, &str)> = root.library[0].iter().collect();
        assert_eq!(pairs, vec![("playcount", "2"), ("watched", "true")]);
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = json_to_record("{\"media\": ").unwrap_err();
        assert!(matches!(err, ConvertError::Json(_)));
    }
}

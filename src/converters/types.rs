//! Public configuration and reporting types

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::Result;

/// Configuration options for conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionSettings {
    /// Spaces per nesting level in written XML (0 writes one element per line, unindented)
    pub indent: usize,

    /// Run the soft-invariant checks after parsing XML
    pub validate: bool,
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            indent: 2,
            validate: false,
        }
    }
}

impl ConversionSettings {
    /// Load settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// On-disk representation of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// NFOStandard XML (`.nfo`, `.xml`)
    Xml,
    /// Compact binary encoding (`.nfpb`, `.pb`)
    Binary,
    /// JSON rendering of the record (`.json`)
    Json,
}

impl Format {
    /// Detect the format from a file extension, ignoring case
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "nfo" | "xml" => Some(Format::Xml),
            "nfpb" | "pb" => Some(Format::Binary),
            "json" => Some(Format::Json),
            _ => None,
        }
    }

    /// Preferred file extension
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Xml => "nfo",
            Format::Binary => "nfpb",
            Format::Json => "json",
        }
    }
}

/// Outcome of a file-to-file conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionReport {
    pub from: Format,
    pub to: Format,
    pub input_bytes: usize,
    pub output_bytes: usize,
}

impl ConversionReport {
    /// Output size relative to input, as a percentage reduction (negative when it grew)
    pub fn reduction_percent(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        (1.0 - self.output_bytes as f64 / self.input_bytes as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_detection() {
        assert_eq!(Format::from_path(&PathBuf::from("movie.nfo")), Some(Format::Xml));
        assert_eq!(Format::from_path(&PathBuf::from("movie.XML")), Some(Format::Xml));
        assert_eq!(Format::from_path(&PathBuf::from("movie.nfpb")), Some(Format::Binary));
        assert_eq!(Format::from_path(&PathBuf::from("movie.pb")), Some(Format::Binary));
        assert_eq!(Format::from_path(&PathBuf::from("movie.json")), Some(Format::Json));
        assert_eq!(Format::from_path(&PathBuf::from("movie.txt")), None);
        assert_eq!(Format::from_path(&PathBuf::from("movie")), None);
    }

    #[test]
    fn test_settings_from_partial_json() {
        let settings = ConversionSettings::from_json(r#"{"validate": true}"#).unwrap();
        assert!(settings.validate);
        assert_eq!(settings.indent, 2);
    }

    #[test]
    fn test_settings_rejects_bad_json() {
        assert!(ConversionSettings::from_json("{indent:").is_err());
    }

    #[test]
    fn test_reduction_percent() {
        let report = ConversionReport {
            from: Format::Xml,
            to: Format::Binary,
            input_bytes: 1000,
            output_bytes: 250,
        };
        assert!((report.reduction_percent() - 75.0).abs() < 1e-9);
    }
}

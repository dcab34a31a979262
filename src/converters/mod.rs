//! Format converters
//!
//! Conversions between NFOStandard XML, the compact binary encoding and the
//! in-memory [`NfoRoot`] record. The free functions use default settings;
//! [`Converter`] carries explicit [`ConversionSettings`].

pub mod binary;
pub mod coerce;
pub mod errors;
pub mod json;
pub mod nfo_xml;
pub mod persist;
pub mod types;
pub mod validate;

pub use errors::{ConvertError, Result};
pub use persist::{convert_file, load_binary, load_xml, save_binary, save_xml};
pub use types::{ConversionReport, ConversionSettings, Format};
pub use validate::{validate, ValidationIssue};

use crate::models::NfoRoot;

/// Parse NFOStandard XML into a record
pub fn xml_to_record(xml: &str) -> Result<NfoRoot> {
    nfo_xml::parse(xml)
}

/// Write a record as NFOStandard XML
pub fn record_to_xml(root: &NfoRoot) -> String {
    nfo_xml::serialize(root)
}

pub fn record_to_binary(root: &NfoRoot) -> Vec<u8> {
    binary::encode(root)
}

pub fn binary_to_record(bytes: &[u8]) -> Result<NfoRoot> {
    binary::decode(bytes)
}

/// XML text straight to binary bytes
pub fn xml_to_binary(xml: &str) -> Result<Vec<u8>> {
    Converter::default().xml_to_binary(xml)
}

/// Binary bytes straight to XML text
pub fn binary_to_xml(bytes: &[u8]) -> Result<String> {
    Converter::default().binary_to_xml(bytes)
}

/// Converter with explicit settings
#[derive(Debug, Clone, Default)]
pub struct Converter {
    pub settings: ConversionSettings,
}

impl Converter {
    pub fn new(settings: ConversionSettings) -> Self {
        Self { settings }
    }

    /// Parse XML, running the soft-invariant checks when `settings.validate` is set
    ///
    /// Issues are only logged here; use [`Converter::xml_to_record_checked`]
    /// to get them back.
    pub fn xml_to_record(&self, xml: &str) -> Result<NfoRoot> {
        if self.settings.validate {
            let (root, _) = self.xml_to_record_checked(xml)?;
            Ok(root)
        } else {
            nfo_xml::parse(xml)
        }
    }

    /// Parse XML and always run the soft-invariant checks
    pub fn xml_to_record_checked(&self, xml: &str) -> Result<(NfoRoot, Vec<ValidationIssue>)> {
        let root = nfo_xml::parse(xml)?;
        let issues = validate::validate(&root);
        log::debug!("validation found {} issue(s)", issues.len());
        Ok((root, issues))
    }

    pub fn record_to_xml(&self, root: &NfoRoot) -> String {
        nfo_xml::write_document(root, self.settings.indent)
    }

    pub fn xml_to_binary(&self, xml: &str) -> Result<Vec<u8>> {
        let root = self.xml_to_record(xml)?;
        Ok(binary::encode(&root))
    }

    pub fn binary_to_xml(&self, bytes: &[u8]) -> Result<String> {
        let root = binary::decode(bytes)?;
        Ok(self.record_to_xml(&root))
    }

    /// File-to-file conversion using these settings
    pub fn convert_file(
        &self,
        input: impl AsRef<std::path::Path>,
        output: impl AsRef<std::path::Path>,
    ) -> Result<ConversionReport> {
        persist::convert_file(input, output, &self.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHOW: &str = r#"<root xmlns="NFOStandard">
  <media>
    <tvshow>
      <title>Twin Peaks</title>
      <premiered>1990-04-08</premiered>
      <season>2</season>
    </tvshow>
  </media>
</root>"#;

    #[test]
    fn test_xml_to_binary_and_back() {
        let bytes = xml_to_binary(SHOW).unwrap();
        let xml = binary_to_xml(&bytes).unwrap();
        assert_eq!(xml_to_record(&xml).unwrap(), xml_to_record(SHOW).unwrap());
    }

    #[test]
    fn test_xml_to_binary_rejects_wrong_root() {
        let err = xml_to_binary("<movie><title>X</title></movie>").unwrap_err();
        assert!(matches!(err, ConvertError::MalformedDocument(_)));
    }

    #[test]
    fn test_checked_parse_returns_issues() {
        let xml = r#"<root><media><movie>
            <rating name="imdb" default="true"><value>7</value></rating>
            <rating name="tmdb" default="true"><value>7.2</value></rating>
        </movie></media></root>"#;

        let (root, issues) = Converter::default().xml_to_record_checked(xml).unwrap();
        assert_eq!(root.media.as_ref().and_then(|m| m.movie()).unwrap().ratings.len(), 2);
        assert_eq!(
            issues,
            vec![ValidationIssue::MultipleDefaultRatings {
                media: "movie".to_string(),
                count: 2
            }]
        );

        let (_, issues) = Converter::default().xml_to_record_checked(SHOW).unwrap();
        assert!(issues.is_empty());
    }

    #[test]
    fn test_converter_indent_setting() {
        let converter = Converter::new(ConversionSettings {
            indent: 4,
            validate: true,
        });
        let root = converter.xml_to_record(SHOW).unwrap();
        let xml = converter.record_to_xml(&root);
        assert!(xml.contains("\n    <media>"));
        assert!(xml.contains("\n            <title>Twin Peaks</title>"));
    }
}

//! File persistence helpers
//!
//! Each helper does one blocking read or write. I/O errors come back as
//! [`ConvertError::Io`] unchanged; codec errors as the codec reports them.
//! Text files that are not UTF-8 are [`ConvertError::MalformedDocument`].

use std::fs;
use std::path::Path;

use super::errors::{ConvertError, Result};
use super::types::{ConversionReport, ConversionSettings, Format};
use super::{binary, json, nfo_xml};
use crate::models::NfoRoot;

/// Write the binary encoding of `root` to `path`
pub fn save_binary(root: &NfoRoot, path: impl AsRef<Path>) -> Result<()> {
    fs::write(path, binary::encode(root))?;
    Ok(())
}

/// Read and decode a binary file
pub fn load_binary(path: impl AsRef<Path>) -> Result<NfoRoot> {
    let bytes = fs::read(path)?;
    binary::decode(&bytes)
}

pub fn save_xml(root: &NfoRoot, path: impl AsRef<Path>) -> Result<()> {
    fs::write(path, nfo_xml::serialize(root))?;
    Ok(())
}

pub fn load_xml(path: impl AsRef<Path>) -> Result<NfoRoot> {
    let path = path.as_ref();
    let text = into_text(path, fs::read(path)?)?;
    nfo_xml::parse(&text)
}

/// Load a document in whatever format its extension names
pub fn load(path: &Path) -> Result<(NfoRoot, Format, usize)> {
    let format = detect(path)?;
    let bytes = fs::read(path)?;
    let size = bytes.len();

    let root = match format {
        Format::Binary => binary::decode(&bytes)?,
        Format::Xml => nfo_xml::parse(&into_text(path, bytes)?)?,
        Format::Json => json::json_to_record(&into_text(path, bytes)?)?,
    };

    Ok((root, format, size))
}

/// Render `root` in `format`
pub fn render(root: &NfoRoot, format: Format, settings: &ConversionSettings) -> Result<Vec<u8>> {
    let bytes = match format {
        Format::Xml => nfo_xml::write_document(root, settings.indent).into_bytes(),
        Format::Binary => binary::encode(root),
        Format::Json => json::record_to_json(root)?.into_bytes(),
    };
    Ok(bytes)
}

/// Convert `input` to `output`, picking both formats from the file extensions
pub fn convert_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    settings: &ConversionSettings,
) -> Result<ConversionReport> {
    let input = input.as_ref();
    let output = output.as_ref();

    let to = detect(output)?;
    let (root, from, input_bytes) = load(input)?;
    let rendered = render(&root, to, settings)?;
    fs::write(output, &rendered)?;

    let report = ConversionReport {
        from,
        to,
        input_bytes,
        output_bytes: rendered.len(),
    };
    log::debug!(
        "converted {} ({:?}, {} bytes) -> {} ({:?}, {} bytes)",
        input.display(),
        from,
        report.input_bytes,
        output.display(),
        to,
        report.output_bytes
    );
    Ok(report)
}

/// File contents as text; invalid UTF-8 is a content error, not an I/O one
fn into_text(path: &Path, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| {
        ConvertError::MalformedDocument(format!(
            "{} is not valid UTF-8: {}",
            path.display(),
            e.utf8_error()
        ))
    })
}

fn detect(path: &Path) -> Result<Format> {
    Format::from_path(path).ok_or_else(|| {
        ConvertError::UnsupportedFormat(format!(
            "cannot determine format of {}",
            path.display()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::*;

    fn sample() -> NfoRoot {
        NfoRoot::with_media(Movie {
            title: "Test Movie".to_string(),
            year: 2024,
            ..Default::default()
        })
    }

    #[test]
    fn test_save_and_load_binary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("movie.nfpb");

        save_binary(&sample(), &path).unwrap();
        let loaded = load_binary(&path).unwrap();

        let movie = loaded.media.as_ref().and_then(|m| m.movie()).unwrap();
        assert_eq!(movie.title, "Test Movie");
        assert_eq!(movie.year, 2024);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_binary(dir.path().join("missing.nfpb")).unwrap_err();
        match err {
            ConvertError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_corrupt_binary_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.nfpb");
        fs::write(&path, [0x0A, 0xFF]).unwrap();
        assert!(matches!(load_binary(&path), Err(ConvertError::CorruptEncoding(_))));
    }

    #[test]
    fn test_non_utf8_xml_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("latin1.nfo");
        fs::write(&input, b"<root><media><movie><title>Am\xE9lie</title></movie></media></root>")
            .unwrap();

        assert!(matches!(load_xml(&input), Err(ConvertError::MalformedDocument(_))));
        let err = convert_file(&input, dir.path().join("out.nfpb"), &ConversionSettings::default())
            .unwrap_err();
        match err {
            ConvertError::MalformedDocument(msg) => assert!(msg.contains("not valid UTF-8")),
            other => panic!("Expected MalformedDocument, got {:?}", other),
        }
    }

    #[test]
    fn test_convert_file_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("movie.nfo");
        save_xml(&sample(), &input).unwrap();

        let err = convert_file(&input, dir.path().join("movie.txt"), &ConversionSettings::default())
            .unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_convert_file_xml_to_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("movie.nfo");
        let output = dir.path().join("movie.json");
        save_xml(&sample(), &input).unwrap();

        let report = convert_file(&input, &output, &ConversionSettings::default()).unwrap();
        assert_eq!(report.from, Format::Xml);
        assert_eq!(report.to, Format::Json);

        let text = fs::read_to_string(&output).unwrap();
        assert_eq!(json::json_to_record(&text).unwrap(), sample());
    }
}

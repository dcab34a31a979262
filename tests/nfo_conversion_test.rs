// End-to-end conversion tests through the public facade

use nfostandard_codec::converters::{
    binary_to_record, binary_to_xml, convert_file, load_binary, record_to_binary, record_to_xml,
    save_binary, xml_to_binary, xml_to_record, ConversionSettings, ConvertError, Converter,
    Format,
};
use nfostandard_codec::models::*;

const INCEPTION: &str = r#"<root xmlns="NFOStandard"><media><movie><title>Inception</title><year>2010</year>
<rating name="imdb" max="10" default="true"><value>8.8</value><votes>2000000</votes></rating>
<genre>Action</genre><genre>Sci-Fi</genre></movie></media></root>"#;

fn matrix() -> NfoRoot {
    NfoRoot::with_media(Movie {
        title: "The Matrix".to_string(),
        plot: "A computer hacker learns from mysterious rebels about the true nature of his reality \
               and his role in the war."
            .to_string(),
        year: 1999,
        ratings: vec![
            Rating {
                votes: 1900000,
                default: true,
                ..Rating::new("imdb", 8.7, 10)
            },
            Rating {
                votes: 25000,
                ..Rating::new("tmdb", 8.2, 10)
            },
        ],
        genres: vec![
            "Action".to_string(),
            "Science Fiction".to_string(),
            "Thriller".to_string(),
        ],
        ..Default::default()
    })
}

#[test]
fn test_inception_xml_binary_xml() {
    let bytes = xml_to_binary(INCEPTION).expect("XML to binary should succeed");
    let root = binary_to_record(&bytes).expect("binary should decode");

    let movie = root.media.as_ref().and_then(|m| m.movie()).expect("movie expected");
    assert_eq!(movie.title, "Inception");
    assert_eq!(movie.year, 2010);
    assert_eq!(movie.ratings[0].value, 8.8);
    assert_eq!(movie.ratings[0].votes, 2000000);
    assert!(movie.ratings[0].default);
    assert_eq!(movie.genres, vec!["Action", "Sci-Fi"]);

    let xml = binary_to_xml(&bytes).expect("binary to XML should succeed");
    assert!(xml.contains("<rating name=\"imdb\" max=\"10\" default=\"true\">"));
    assert!(xml.contains("<value>8.8</value>"));
    assert_eq!(xml_to_record(&xml).unwrap(), root);
}

#[test]
fn test_binary_round_trip_is_identity() {
    let root = matrix();
    assert_eq!(binary_to_record(&record_to_binary(&root)).unwrap(), root);
}

// The 70% bar is against the default two-space indented output; unindented
// XML of the same record only gets to about 68%.
#[test]
fn test_binary_is_much_smaller_than_xml() {
    let root = matrix();
    let plot_len = root.media.as_ref().and_then(|m| m.movie()).unwrap().plot.len();
    assert!(plot_len >= 100);

    let xml = record_to_xml(&root);
    let bytes = record_to_binary(&root);

    let reduction = 100.0 * (1.0 - bytes.len() as f64 / xml.len() as f64);
    assert!(
        reduction >= 70.0,
        "expected at least 70% reduction, got {:.1}% ({} vs {} bytes)",
        reduction,
        bytes.len(),
        xml.len()
    );
}

#[test]
fn test_xml_to_binary_rejects_non_nfo() {
    let err = xml_to_binary("<invalid>Not valid NFO XML</invalid>").unwrap_err();
    assert!(matches!(err, ConvertError::MalformedDocument(_)));
}

#[test]
fn test_corrupt_bytes_rejected() {
    let err = binary_to_xml(&[0x0A, 0x05, 0x0A]).unwrap_err();
    assert!(matches!(err, ConvertError::CorruptEncoding(_)));
}

#[test]
fn test_binary_file_persistence() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("matrix.nfpb");

    save_binary(&matrix(), &path).unwrap();
    assert_eq!(load_binary(&path).unwrap(), matrix());
}

#[test]
fn test_convert_file_xml_to_binary_and_back() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("inception.nfo");
    let packed = dir.path().join("inception.nfpb");
    let restored = dir.path().join("restored.xml");
    std::fs::write(&source, INCEPTION).unwrap();

    let settings = ConversionSettings::default();
    let report = convert_file(&source, &packed, &settings).unwrap();
    assert_eq!(report.from, Format::Xml);
    assert_eq!(report.to, Format::Binary);
    assert_eq!(report.input_bytes, INCEPTION.len());
    assert!(report.output_bytes < report.input_bytes);

    let report = Converter::new(settings).convert_file(&packed, &restored).unwrap();
    assert_eq!(report.from, Format::Binary);
    assert_eq!(report.to, Format::Xml);

    let restored_xml = std::fs::read_to_string(&restored).unwrap();
    assert_eq!(
        xml_to_record(&restored_xml).unwrap(),
        xml_to_record(INCEPTION).unwrap()
    );
}

#[test]
fn test_converter_with_validation_still_converts() {
    let xml = r#"<root><media><tvshow>
        <title>Dark</title>
        <uniqueid type="tvdb" default="true">334824</uniqueid>
        <uniqueid type="imdb" default="true">tt5753856</uniqueid>
    </tvshow></media></root>"#;

    let converter = Converter::new(ConversionSettings {
        indent: 2,
        validate: true,
    });
    let bytes = converter.xml_to_binary(xml).unwrap();
    let root = binary_to_record(&bytes).unwrap();

    let show = root.media.as_ref().and_then(|m| m.tvshow()).unwrap();
    assert_eq!(show.unique_ids.len(), 2);
    assert_eq!(show.unique_ids[1].value, "tt5753856");
}

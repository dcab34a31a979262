//! NFOStandard XML reader and writer
//!
//! # Overview
//!
//! ```text
//! XML text ──[roxmltree]──> ElementNode lookups ──> NfoRoot
//! NfoRoot ──[NfoXmlBuilder]──> XML text
//! ```
//!
//! The reader is permissive (best-effort extraction, local-name matching);
//! the writer always emits the namespaced, schema-referencing layout.

pub mod builder;
pub mod parser;

pub use builder::{write_document, AttrList, NfoXmlBuilder};
pub use parser::{get_child, get_children, parse, ElementNode};

use crate::models::NfoRoot;

/// Default namespace of NFOStandard documents
pub const NFO_NAMESPACE: &str = "NFOStandard";

pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Value of `xsi:schemaLocation` on written documents
pub const SCHEMA_LOCATION: &str = "NFOStandard https://xsd.nfostandard.com/main.xsd";

/// Serialize with the default two-space indentation
pub fn serialize(root: &NfoRoot) -> String {
    write_document(root, 2)
}

/// Whether `name` can be written as an unprefixed element name
pub fn is_valid_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    is_name_start_char(first) && chars.all(is_name_char)
}

// XML 1.0 NameStartChar, without ':'
fn is_name_start_char(c: char) -> bool {
    matches!(c,
        'A'..='Z' | '_' | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}'
    )
}

fn is_name_char(c: char) -> bool {
    is_name_start_char(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}'
            | '\u{300}'..='\u{36F}'
            | '\u{203F}'..='\u{2040}'
        )
}

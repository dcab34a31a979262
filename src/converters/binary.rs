//! Compact binary encoding
//!
//! Protobuf wire format, driven by the `prost` derives on the model types.
//! Default-valued scalars are not written and repeated fields are written
//! entry by entry, so the encoding is lossless for anything the model holds.

use prost::Message;

use super::errors::Result;
use crate::models::NfoRoot;

/// Encode a record to bytes
pub fn encode(root: &NfoRoot) -> Vec<u8> {
    let bytes = root.encode_to_vec();
    log::debug!("encoded NFO record: {} bytes", bytes.len());
    bytes
}

/// Decode bytes produced by [`encode`] (or by any writer of the same schema)
///
/// Repeated library keys collapse, last value wins.
pub fn decode(bytes: &[u8]) -> Result<NfoRoot> {
    let mut root = NfoRoot::decode(bytes)?;
    root.normalize();
    Ok(root)
}

/// Size of the encoding without producing it
pub fn encoded_len(root: &NfoRoot) -> usize {
    root.encoded_len()
}

//! Decoding for the wire form of page titles and bodies.
//!
//! Clients send page text and titles percent-encoded and then wrapped in
//! standard base64, so arbitrary UTF-8 survives both query strings and raw
//! request bodies. Decoding therefore runs base64 first, then
//! percent-decoding.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use percent_encoding::percent_decode_str;

use crate::error::CoreError;

/// Decode a transport-encoded string (base64 over percent-encoded UTF-8).
pub fn decode(encoded: &str) -> Result<String, CoreError> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .map_err(|e| CoreError::Validation(format!("Invalid base64: {e}")))?;
    let percent_encoded = String::from_utf8(bytes)
        .map_err(|e| CoreError::Validation(format!("Invalid UTF-8: {e}")))?;
    percent_decode_str(&percent_encoded)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|e| CoreError::Validation(format!("Invalid percent-encoding: {e}")))
}

/// Decode an optional field, tolerating absence and garbage.
///
/// Page edits treat an undecodable title or body the same as a missing one:
/// the field is left unchanged.
pub fn decode_lenient(encoded: Option<&str>) -> Option<String> {
    encoded.and_then(|e| decode(e).ok())
}

/// Encode a string into transport form. Used by tests and client tooling;
/// the server itself only decodes.
pub fn encode(plain: &str) -> String {
    let percent_encoded: String =
        percent_encoding::utf8_percent_encode(plain, percent_encoding::NON_ALPHANUMERIC)
            .to_string();
    STANDARD.encode(percent_encoded.as_bytes())
}

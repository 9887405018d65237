//! Charset resolution and byte-to-text decoding.
//!
//! A response's charset comes from the `charset` parameter of its
//! `Content-Type` header. When there is no such parameter the charset is
//! undetermined and the body is decoded with the reader default (UTF-8,
//! malformed sequences replaced) instead of an explicitly named encoding.

use std::io::Read;

use encoding_rs::Encoding;
use tracing::warn;

use crate::error::{HttpError, Result};

/// Charset advertised on requests that do not name one.
pub const DEFAULT_REQUEST_CHARSET: &str = "UTF-8";

/// Extract the `charset` parameter from a `Content-Type` value.
///
/// All whitespace is removed before splitting on `;`. The first `charset=`
/// parameter wins. Surrounding quotes are dropped and an empty value counts
/// as absent.
pub fn charset_of(content_type: Option<&str>) -> Option<String> {
    let compact: String = content_type?
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    compact
        .split(';')
        .find_map(|param| {
            let (name, value) = param.split_once('=')?;
            name.eq_ignore_ascii_case("charset").then_some(value)
        })
        .map(|value| value.trim_matches('"'))
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

/// Read `reader` to the end and decode it.
///
/// With `charset` set, the named encoding is used; unknown labels are an
/// error. With `None`, the reader default applies.
pub fn read_text<R: Read>(reader: R, charset: Option<&str>) -> Result<String> {
    decode(&read_bytes(reader)?, charset)
}

/// Like [`read_text`], but an unknown charset label falls back to the reader
/// default instead of failing. Used for error bodies, where the status must
/// survive a bad label.
pub fn read_text_lenient<R: Read>(reader: R, charset: Option<&str>) -> Result<String> {
    let bytes = read_bytes(reader)?;
    match decode(&bytes, charset) {
        Err(HttpError::UnsupportedCharset(label)) => {
            warn!(charset = %label, "unknown charset on error body, using default decoding");
            decode(&bytes, None)
        }
        other => other,
    }
}

fn read_bytes<R: Read>(mut reader: R) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Decode with the named encoding exactly; a byte-order mark never overrides it.
pub fn decode(bytes: &[u8], charset: Option<&str>) -> Result<String> {
    match charset {
        Some(label) => {
            let encoding = Encoding::for_label(label.as_bytes())
                .ok_or_else(|| HttpError::UnsupportedCharset(label.to_string()))?;
            let (text, _) = encoding.decode_without_bom_handling(bytes);
            Ok(text.into_owned())
        }
        None => Ok(String::from_utf8_lossy(bytes).into_owned()),
    }
}

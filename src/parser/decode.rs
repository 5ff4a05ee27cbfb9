//! Source text decoding.
//!
//! Strict UTF-8 first; anything else is read as GBK with undecodable bytes
//! dropped. Line endings are normalized to `\n` either way.

use encoding_rs::GBK;

/// Decoded source text.
#[derive(Debug)]
pub struct Decoded {
    pub text: String,
    /// Set when the bytes were not valid UTF-8 and GBK was used instead
    pub fallback: bool,
}

pub fn decode(bytes: &[u8]) -> Decoded {
    match std::str::from_utf8(bytes) {
        Ok(text) => Decoded {
            text: normalize_newlines(text),
            fallback: false,
        },
        Err(_) => {
            // encoding_rs decodes GBK as GB18030, so four-byte sequences map to
            // characters instead of being dropped.
            let (text, had_errors) = GBK.decode_without_bom_handling(bytes);
            let text = if had_errors {
                text.replace(char::REPLACEMENT_CHARACTER, "")
            } else {
                text.into_owned()
            };
            Decoded {
                text: normalize_newlines(&text),
                fallback: true,
            }
        }
    }
}

/// Convert `\r\n` and lone `\r` to `\n`.
fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

//! Candidate text encodings for chart files.
//!
//! Charts exported by different tool versions end up in UTF-8, UTF-16 or a
//! Western legacy code page. The loader tries `CANDIDATES` in order and keeps
//! the first one that both decodes and parses.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252};
use strum::IntoStaticStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
pub enum TextEncoding {
    #[strum(serialize = "UTF-8")]
    Utf8,
    #[strum(serialize = "UTF-16")]
    Utf16,
    #[strum(serialize = "Latin-1")]
    Latin1,
}

/// Encodings tried by the chart loader, in order.
pub const CANDIDATES: [TextEncoding; 3] = [
    TextEncoding::Utf8,
    TextEncoding::Utf16,
    TextEncoding::Latin1,
];

impl TextEncoding {
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Decode `bytes` strictly.
    ///
    /// Returns `None` if the bytes are malformed under this encoding.
    /// Latin-1 is decoded as windows-1252, which maps every byte and never
    /// fails; 0x80..0x9F become typographic characters such as `€`.
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Option<Cow<'a, str>> {
        match self {
            Self::Utf8 => {
                let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
                UTF_8.decode_without_bom_handling_and_without_replacement(bytes)
            }
            Self::Utf16 => {
                let (encoding, bom_len) = match Encoding::for_bom(bytes) {
                    Some((enc, len)) if enc == UTF_16LE || enc == UTF_16BE => (enc, len),
                    _ => (UTF_16LE, 0),
                };
                encoding.decode_without_bom_handling_and_without_replacement(&bytes[bom_len..])
            }
            Self::Latin1 => {
                WINDOWS_1252.decode_without_bom_handling_and_without_replacement(bytes)
            }
        }
    }
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

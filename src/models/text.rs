//! Free-form text as held by the host application.
//!
//! Beatmap metadata and player names come from community data and local
//! databases, so they do not always arrive as UTF-8. `Text` keeps the raw
//! form and `Text::normalize` produces the single encoding used on the wire.

use serde::Deserialize;

/// Free-form text in the encoding the host holds it in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Text {
    /// Already valid UTF-8.
    Utf8(String),
    /// Raw bytes from a file or database. Decoded as UTF-8 when valid,
    /// otherwise as Windows-1252.
    Bytes(Vec<u8>),
    /// UTF-16 code units, as produced by wide-string platform APIs.
    Wide(Vec<u16>),
}

impl Text {
    /// Decodes the text into UTF-8. Content is otherwise left untouched.
    ///
    /// Bytes that are not valid UTF-8 are read as Windows-1252, the legacy
    /// encoding of osu! metadata. Unpaired UTF-16 surrogates become U+FFFD.
    /// Never fails.
    pub fn normalize(&self) -> String {
        match self {
            Text::Utf8(s) => s.clone(),
            Text::Bytes(bytes) => match std::str::from_utf8(bytes) {
                Ok(s) => s.to_owned(),
                Err(_) => bytes.iter().map(|&b| windows_1252_char(b)).collect(),
            },
            Text::Wide(units) => String::from_utf16_lossy(units),
        }
    }
}

/// Code points of Windows-1252 bytes 0x80..=0x9F.
///
/// The five unassigned bytes map to the C1 control of the same value.
const WINDOWS_1252_HIGH: [char; 32] = [
    '\u{20AC}', '\u{81}', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\u{8D}', '\u{017D}', '\u{8F}',
    '\u{90}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{02DC}', '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '\u{9D}', '\u{017E}', '\u{0178}',
];

fn windows_1252_char(byte: u8) -> char {
    match byte {
        0x80..=0x9F => WINDOWS_1252_HIGH[usize::from(byte - 0x80)],
        // Everything else coincides with ISO-8859-1
        _ => char::from(byte),
    }
}

impl Default for Text {
    fn default() -> Self {
        Text::Utf8(String::new())
    }
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Text::Utf8(s)
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text::Utf8(s.to_owned())
    }
}

impl From<Vec<u8>> for Text {
    fn from(bytes: Vec<u8>) -> Self {
        Text::Bytes(bytes)
    }
}

impl From<Vec<u16>> for Text {
    fn from(units: Vec<u16>) -> Self {
        Text::Wide(units)
    }
}

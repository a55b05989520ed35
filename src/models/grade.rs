//! Letter-grade classification.

use serde::Deserialize;
use strum_macros::EnumIter as EnumIterMacro;

/// Letter grade of a completed play, ordered from best to worst.
///
/// The "silver" variants are the hidden/flashlight versions of SS and S.
/// `NoGrade` is the sentinel for plays that have no grade, and the fallback
/// for numeric codes this crate does not know about.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, EnumIterMacro, Deserialize,
)]
pub enum Grade {
    /// SS with hidden or flashlight ("XH").
    #[serde(rename = "XH")]
    SilverSS,
    /// SS ("X").
    #[serde(rename = "X")]
    SS,
    /// S with hidden or flashlight ("SH").
    #[serde(rename = "SH")]
    SilverS,
    /// S.
    S,
    /// A.
    A,
    /// B.
    B,
    /// C.
    C,
    /// D.
    D,
    /// Failed play.
    F,
    /// No grade ("N").
    #[default]
    #[serde(rename = "N")]
    NoGrade,
}

impl Grade {
    /// Converts the host's numeric grade code into a `Grade`.
    ///
    /// Codes follow the host's declaration order (XH, SH, X, S, A, B, C, D, F, N).
    /// Unknown codes map to `Grade::NoGrade`.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Grade::SilverSS,
            1 => Grade::SilverS,
            2 => Grade::SS,
            3 => Grade::S,
            4 => Grade::A,
            5 => Grade::B,
            6 => Grade::C,
            7 => Grade::D,
            8 => Grade::F,
            _ => Grade::NoGrade,
        }
    }

    /// Returns the wire token for this grade.
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::SilverSS => "XH",
            Grade::SS => "X",
            Grade::SilverS => "SH",
            Grade::S => "S",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
            Grade::NoGrade => "N",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

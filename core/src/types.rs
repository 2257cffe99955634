use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// A classified signal token as produced by the upstream classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Signal {
    Dit,
    Dah,
    PauseShort,
    PauseMedium,
    PauseLong,
}

impl Signal {
    pub const ALL: [Signal; 5] = [
        Signal::Dit,
        Signal::Dah,
        Signal::PauseShort,
        Signal::PauseMedium,
        Signal::PauseLong,
    ];

    /// The mark carried by this signal, `None` for pauses.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Signal::Dit => Some(Mark::Dit),
            Signal::Dah => Some(Mark::Dah),
            Signal::PauseShort | Signal::PauseMedium | Signal::PauseLong => None,
        }
    }

    pub fn is_mark(self) -> bool {
        self.mark().is_some()
    }
}

/// The two edges of the code tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mark {
    Dit = 0,
    Dah = 1,
}

impl From<Mark> for Signal {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::Dit => Signal::Dit,
            Mark::Dah => Signal::Dah,
        }
    }
}

/// Terminal symbols of the code tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    Ch,
    AUmlaut,
    OUmlaut,
    UUmlaut,
    Ampersand,
}

impl Symbol {
    /// Text appended to the decoded output for this symbol.
    pub fn as_str(self) -> &'static str {
        match self {
            Symbol::A => "A",
            Symbol::B => "B",
            Symbol::C => "C",
            Symbol::D => "D",
            Symbol::E => "E",
            Symbol::F => "F",
            Symbol::G => "G",
            Symbol::H => "H",
            Symbol::I => "I",
            Symbol::J => "J",
            Symbol::K => "K",
            Symbol::L => "L",
            Symbol::M => "M",
            Symbol::N => "N",
            Symbol::O => "O",
            Symbol::P => "P",
            Symbol::Q => "Q",
            Symbol::R => "R",
            Symbol::S => "S",
            Symbol::T => "T",
            Symbol::U => "U",
            Symbol::V => "V",
            Symbol::W => "W",
            Symbol::X => "X",
            Symbol::Y => "Y",
            Symbol::Z => "Z",
            Symbol::Digit0 => "0",
            Symbol::Digit1 => "1",
            Symbol::Digit2 => "2",
            Symbol::Digit3 => "3",
            Symbol::Digit4 => "4",
            Symbol::Digit5 => "5",
            Symbol::Digit6 => "6",
            Symbol::Digit7 => "7",
            Symbol::Digit8 => "8",
            Symbol::Digit9 => "9",
            Symbol::Ch => "CH",
            Symbol::AUmlaut => "Ä",
            Symbol::OUmlaut => "Ö",
            Symbol::UUmlaut => "Ü",
            Symbol::Ampersand => "&",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a boundary pause emits when no mark was seen since the previous boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmptyBoundary {
    /// Emit the empty-character marker so the stray pause stays visible.
    #[default]
    Marker,
    /// Emit nothing for the character (a long pause still adds its space).
    Skip,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MorseDecodeParams {
    pub empty_boundary: EmptyBoundary,
    /// Stop batch decoding once the output reaches this many bytes. Unbounded when `None`.
    pub max_output_length: Option<usize>,
}

impl Default for MorseDecodeParams {
    fn default() -> Self {
        Self {
            empty_boundary: EmptyBoundary::Marker,
            max_output_length: None,
        }
    }
}

impl MorseDecodeParams {
    /// Parse params from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }
}

/// Running counters kept by a decoder session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeStats {
    pub signals_processed: usize,
    pub characters_decoded: usize,
    pub protocol_violations: usize,
    pub undefined_codes: usize,
    pub empty_boundaries: usize,
    /// Set when batch decoding stopped at the output limit before the last signal.
    pub truncated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MorseDecodeResult {
    pub text: String,
    #[serde(flatten)]
    pub stats: DecodeStats,
}

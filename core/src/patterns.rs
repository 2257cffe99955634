// International Morse code table - symbol to mark sequence
// Source data for the code tree, one entry per terminal symbol
use crate::types::{Mark, Symbol};

pub type MorsePattern = &'static [Mark];

const DIT: Mark = Mark::Dit;
const DAH: Mark = Mark::Dah;

// Letter patterns
const PATTERN_A: MorsePattern = &[DIT, DAH]; // .-
const PATTERN_B: MorsePattern = &[DAH, DIT, DIT, DIT]; // -...
const PATTERN_C: MorsePattern = &[DAH, DIT, DAH, DIT]; // -.-.
const PATTERN_D: MorsePattern = &[DAH, DIT, DIT]; // -..
const PATTERN_E: MorsePattern = &[DIT]; // .
const PATTERN_F: MorsePattern = &[DIT, DIT, DAH, DIT]; // ..-.
const PATTERN_G: MorsePattern = &[DAH, DAH, DIT]; // --.
const PATTERN_H: MorsePattern = &[DIT, DIT, DIT, DIT]; // ....
const PATTERN_I: MorsePattern = &[DIT, DIT]; // ..
const PATTERN_J: MorsePattern = &[DIT, DAH, DAH, DAH]; // .---
const PATTERN_K: MorsePattern = &[DAH, DIT, DAH]; // -.-
const PATTERN_L: MorsePattern = &[DIT, DAH, DIT, DIT]; // .-..
const PATTERN_M: MorsePattern = &[DAH, DAH]; // --
const PATTERN_N: MorsePattern = &[DAH, DIT]; // -.
const PATTERN_O: MorsePattern = &[DAH, DAH, DAH]; // ---
const PATTERN_P: MorsePattern = &[DIT, DAH, DAH, DIT]; // .--.
const PATTERN_Q: MorsePattern = &[DAH, DAH, DIT, DAH]; // --.-
const PATTERN_R: MorsePattern = &[DIT, DAH, DIT]; // .-.
const PATTERN_S: MorsePattern = &[DIT, DIT, DIT]; // ...
const PATTERN_T: MorsePattern = &[DAH]; // -
const PATTERN_U: MorsePattern = &[DIT, DIT, DAH]; // ..-
const PATTERN_V: MorsePattern = &[DIT, DIT, DIT, DAH]; // ...-
const PATTERN_W: MorsePattern = &[DIT, DAH, DAH]; // .--
const PATTERN_X: MorsePattern = &[DAH, DIT, DIT, DAH]; // -..-
const PATTERN_Y: MorsePattern = &[DAH, DIT, DAH, DAH]; // -.--
const PATTERN_Z: MorsePattern = &[DAH, DAH, DIT, DIT]; // --..

// Number patterns
const PATTERN_0: MorsePattern = &[DAH, DAH, DAH, DAH, DAH]; // -----
const PATTERN_1: MorsePattern = &[DIT, DAH, DAH, DAH, DAH]; // .----
const PATTERN_2: MorsePattern = &[DIT, DIT, DAH, DAH, DAH]; // ..---
const PATTERN_3: MorsePattern = &[DIT, DIT, DIT, DAH, DAH]; // ...--
const PATTERN_4: MorsePattern = &[DIT, DIT, DIT, DIT, DAH]; // ....-
const PATTERN_5: MorsePattern = &[DIT, DIT, DIT, DIT, DIT]; // .....
const PATTERN_6: MorsePattern = &[DAH, DIT, DIT, DIT, DIT]; // -....
const PATTERN_7: MorsePattern = &[DAH, DAH, DIT, DIT, DIT]; // --...
const PATTERN_8: MorsePattern = &[DAH, DAH, DAH, DIT, DIT]; // ---..
const PATTERN_9: MorsePattern = &[DAH, DAH, DAH, DAH, DIT]; // ----.

// Special characters
const PATTERN_CH: MorsePattern = &[DAH, DAH, DAH, DAH]; // ----
const PATTERN_AE: MorsePattern = &[DIT, DAH, DIT, DAH]; // .-.-
const PATTERN_OE: MorsePattern = &[DAH, DAH, DAH, DIT]; // ---.
const PATTERN_UE: MorsePattern = &[DIT, DIT, DAH, DAH]; // ..--
const PATTERN_AMPERSAND: MorsePattern = &[DIT, DAH, DIT, DIT, DIT]; // .-...

/// Canonical code table, in the order the decoder tests expect it.
pub static CODE_TABLE: [(Symbol, MorsePattern); 41] = [
    (Symbol::A, PATTERN_A),
    (Symbol::B, PATTERN_B),
    (Symbol::C, PATTERN_C),
    (Symbol::D, PATTERN_D),
    (Symbol::E, PATTERN_E),
    (Symbol::F, PATTERN_F),
    (Symbol::G, PATTERN_G),
    (Symbol::H, PATTERN_H),
    (Symbol::I, PATTERN_I),
    (Symbol::J, PATTERN_J),
    (Symbol::K, PATTERN_K),
    (Symbol::L, PATTERN_L),
    (Symbol::M, PATTERN_M),
    (Symbol::N, PATTERN_N),
    (Symbol::O, PATTERN_O),
    (Symbol::P, PATTERN_P),
    (Symbol::Q, PATTERN_Q),
    (Symbol::R, PATTERN_R),
    (Symbol::S, PATTERN_S),
    (Symbol::T, PATTERN_T),
    (Symbol::U, PATTERN_U),
    (Symbol::V, PATTERN_V),
    (Symbol::W, PATTERN_W),
    (Symbol::X, PATTERN_X),
    (Symbol::Y, PATTERN_Y),
    (Symbol::Z, PATTERN_Z),
    (Symbol::Digit0, PATTERN_0),
    (Symbol::Digit1, PATTERN_1),
    (Symbol::Digit2, PATTERN_2),
    (Symbol::Digit3, PATTERN_3),
    (Symbol::Digit4, PATTERN_4),
    (Symbol::Digit5, PATTERN_5),
    (Symbol::Digit6, PATTERN_6),
    (Symbol::Digit7, PATTERN_7),
    (Symbol::Digit8, PATTERN_8),
    (Symbol::Digit9, PATTERN_9),
    (Symbol::Ch, PATTERN_CH),
    (Symbol::AUmlaut, PATTERN_AE),
    (Symbol::OUmlaut, PATTERN_OE),
    (Symbol::UUmlaut, PATTERN_UE),
    (Symbol::Ampersand, PATTERN_AMPERSAND),
];

// Morse code decoding library
// Turns classified signal tokens into text by walking the Morse code tree

pub mod decoder;
pub mod error;
pub mod notation;
pub mod patterns;
pub mod tree;
pub mod types;

// Re-export main public API
pub use decoder::{
    decode_notation, decode_signals, Cursor, MorseDecoder, EMPTY_CHARACTER_MARKER,
    PROTOCOL_VIOLATION_MARKER, UNDEFINED_CODE_MARKER, WORD_SEPARATOR,
};
pub use error::DecodeError;
pub use notation::parse_signals;
pub use tree::{MorseTree, NodeId};
pub use types::*;

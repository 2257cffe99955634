//! Signal-by-signal decoding state machine.
//!
//! A [`MorseDecoder`] keeps a cursor into the shared [`MorseTree`]. Marks move
//! the cursor down the tree, boundary pauses emit whatever the cursor points at
//! and send it back to the root. Malformed input never fails: it shows up in
//! the output text as one of the marker strings below.

use tracing::{debug, trace, warn};

use crate::error::DecodeError;
use crate::notation::parse_signals;
use crate::tree::{MorseTree, NodeId};
use crate::types::{
    DecodeStats, EmptyBoundary, Mark, MorseDecodeParams, MorseDecodeResult, Signal,
};

/// Appended when a mark directly follows another mark.
pub const PROTOCOL_VIOLATION_MARKER: &str = "(E!)";
/// Emitted at a boundary when the marks since the last boundary form no code.
pub const UNDEFINED_CODE_MARKER: &str = "-ERROR-";
/// Emitted at a boundary that closes a character with no marks in it.
pub const EMPTY_CHARACTER_MARKER: &str = "-INITIAL-";
pub const WORD_SEPARATOR: char = ' ';

/// Position of a decoder in the code tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Node(NodeId),
    /// The marks seen so far leave the tree. Sticky until the next boundary.
    Error,
}

/// One decoding session: a cursor into a shared tree plus the text decoded so far.
#[derive(Debug, Clone)]
pub struct MorseDecoder<'t> {
    tree: &'t MorseTree,
    empty_boundary: EmptyBoundary,
    cursor: Cursor,
    last_signal: Signal,
    output: String,
    stats: DecodeStats,
}

impl MorseDecoder<'static> {
    /// Decoder over the shared code tree with default parameters.
    pub fn new() -> Self {
        Self::with_params(&MorseDecodeParams::default())
    }

    /// Decoder over the shared code tree.
    pub fn with_params(params: &MorseDecodeParams) -> Self {
        Self::with_tree(MorseTree::itu(), params)
    }
}

impl Default for MorseDecoder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> MorseDecoder<'t> {
    /// Decoder over a caller-provided tree.
    pub fn with_tree(tree: &'t MorseTree, params: &MorseDecodeParams) -> Self {
        Self {
            tree,
            empty_boundary: params.empty_boundary,
            cursor: Cursor::Node(tree.root()),
            // A long pause so the first mark is never taken as a repeat.
            last_signal: Signal::PauseLong,
            output: String::new(),
            stats: DecodeStats::default(),
        }
    }

    /// Consume one signal.
    pub fn decode(&mut self, signal: Signal) {
        self.stats.signals_processed += 1;

        if signal.is_mark() && self.last_signal.is_mark() {
            warn!(
                %signal,
                last = %self.last_signal,
                "missing pause between two marks"
            );
            self.stats.protocol_violations += 1;
            self.output.push_str(PROTOCOL_VIOLATION_MARKER);
            return;
        }

        match signal {
            Signal::Dit => self.advance(Mark::Dit),
            Signal::Dah => self.advance(Mark::Dah),
            Signal::PauseShort => trace!("element gap"),
            Signal::PauseMedium => {
                self.close_character();
                trace!("new character");
            }
            Signal::PauseLong => {
                self.close_character();
                self.output.push(WORD_SEPARATOR);
                trace!("new word");
            }
        }
        self.last_signal = signal;
    }

    /// Consume signals in order.
    pub fn decode_all<I>(&mut self, signals: I)
    where
        I: IntoIterator<Item = Signal>,
    {
        for signal in signals {
            self.decode(signal);
        }
    }

    fn advance(&mut self, mark: Mark) {
        let next = match self.cursor {
            Cursor::Node(node) => self
                .tree
                .child(node, mark)
                .map_or(Cursor::Error, Cursor::Node),
            Cursor::Error => Cursor::Error,
        };
        if next == Cursor::Error && self.cursor != Cursor::Error {
            warn!(?mark, from = ?self.cursor, "mark leaves the code tree");
        }
        trace!(?mark, from = ?self.cursor, to = ?next, "transition");
        self.cursor = next;
    }

    fn close_character(&mut self) {
        match self.cursor {
            Cursor::Node(node) => match self.tree.symbol_at(node) {
                Some(symbol) => {
                    debug!(%symbol, "decoded character");
                    self.stats.characters_decoded += 1;
                    self.output.push_str(symbol.as_str());
                }
                None if node.is_root() => {
                    debug!(policy = ?self.empty_boundary, "boundary without marks");
                    self.stats.empty_boundaries += 1;
                    if self.empty_boundary == EmptyBoundary::Marker {
                        self.output.push_str(EMPTY_CHARACTER_MARKER);
                    }
                }
                None => self.emit_undefined(),
            },
            Cursor::Error => self.emit_undefined(),
        }
        self.cursor = Cursor::Node(self.tree.root());
    }

    fn emit_undefined(&mut self) {
        debug!("undefined code");
        self.stats.undefined_codes += 1;
        self.output.push_str(UNDEFINED_CODE_MARKER);
    }

    /// Decoded text so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Drain the decoded text, keeping the automaton where it is.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn last_signal(&self) -> Signal {
        self.last_signal
    }

    pub fn stats(&self) -> &DecodeStats {
        &self.stats
    }

    pub fn tree(&self) -> &'t MorseTree {
        self.tree
    }

    /// Return to the initial state, dropping output and counters.
    pub fn reset(&mut self) {
        self.cursor = Cursor::Node(self.tree.root());
        self.last_signal = Signal::PauseLong;
        self.output.clear();
        self.stats = DecodeStats::default();
    }

    pub fn into_result(self) -> MorseDecodeResult {
        MorseDecodeResult {
            text: self.output,
            stats: self.stats,
        }
    }
}

/// Decode a complete signal sequence with a fresh decoder.
///
/// With a `max_output_length` set, stops once the output reaches that many
/// bytes and flags the result as truncated if signals were left over.
pub fn decode_signals(signals: &[Signal], params: &MorseDecodeParams) -> MorseDecodeResult {
    let mut decoder = MorseDecoder::with_params(params);

    for (i, &signal) in signals.iter().enumerate() {
        decoder.decode(signal);

        let Some(limit) = params.max_output_length else {
            continue;
        };
        if decoder.output().len() >= limit && i + 1 < signals.len() {
            warn!(
                limit,
                processed = i + 1,
                remaining = signals.len() - i - 1,
                "output limit reached, dropping remaining signals"
            );
            decoder.stats.truncated = true;
            break;
        }
    }

    decoder.into_result()
}

/// Parse notation and decode it, see [`crate::notation`].
pub fn decode_notation(
    notation: &str,
    params: &MorseDecodeParams,
) -> Result<MorseDecodeResult, DecodeError> {
    let signals = parse_signals(notation)?;
    Ok(decode_signals(&signals, params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::CODE_TABLE;
    use crate::types::Symbol;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn decode_str(notation: &str) -> MorseDecoder<'static> {
        init_tracing();
        let mut decoder = MorseDecoder::new();
        decoder.decode_all(parse_signals(notation).unwrap());
        decoder
    }

    // Mark sequence for one code with short pauses in between.
    fn spaced(marks: &[Mark]) -> Vec<Signal> {
        let mut signals = Vec::new();
        for (i, &mark) in marks.iter().enumerate() {
            if i > 0 {
                signals.push(Signal::PauseShort);
            }
            signals.push(mark.into());
        }
        signals
    }

    #[test]
    fn test_initial_state() {
        let decoder = MorseDecoder::new();
        assert_eq!(decoder.cursor(), Cursor::Node(NodeId::ROOT));
        assert_eq!(decoder.last_signal(), Signal::PauseLong);
        assert_eq!(decoder.output(), "");
    }

    #[test]
    fn test_letter_a() {
        let decoder = decode_str(".,-/");
        assert_eq!(decoder.output(), "A");
    }

    #[test]
    fn test_repeat_mark_without_pause() {
        let decoder = decode_str("../");
        assert_eq!(decoder.output(), "(E!)E");
        assert_eq!(decoder.stats().protocol_violations, 1);
    }

    #[test]
    fn test_letter_b() {
        let decoder = decode_str("-,.,.,./");
        assert_eq!(decoder.output(), "B");
    }

    #[test]
    fn test_word_boundary_appends_space() {
        let decoder = decode_str(".,-/-,-,-|");
        assert_eq!(decoder.output(), "A O ");
    }

    #[test]
    fn test_repeat_mark_leaves_state_untouched() {
        init_tracing();
        let mut decoder = MorseDecoder::new();
        decoder.decode(Signal::Dah);
        let cursor = decoder.cursor();
        let last = decoder.last_signal();

        decoder.decode(Signal::Dit);
        assert_eq!(decoder.cursor(), cursor);
        assert_eq!(decoder.last_signal(), last);

        decoder.decode(Signal::Dah);
        assert_eq!(decoder.cursor(), cursor);
        assert_eq!(decoder.output(), "(E!)(E!)");

        decoder.decode(Signal::PauseMedium);
        assert_eq!(decoder.output(), "(E!)(E!)T");
    }

    #[test]
    fn test_first_mark_is_never_a_repeat() {
        let decoder = decode_str("-/");
        assert_eq!(decoder.output(), "T");
        assert_eq!(decoder.stats().protocol_violations, 0);
    }

    #[test]
    fn test_whole_table_round_trip() {
        init_tracing();
        let mut decoder = MorseDecoder::new();
        let mut expected = String::new();
        for &(symbol, pattern) in CODE_TABLE.iter() {
            decoder.decode_all(spaced(pattern));
            decoder.decode(Signal::PauseMedium);
            expected.push_str(symbol.as_str());
        }
        assert_eq!(decoder.output(), expected);
        assert_eq!(decoder.stats().characters_decoded, CODE_TABLE.len());
    }

    #[test]
    fn test_every_symbol_before_word_boundary() {
        for &(symbol, pattern) in CODE_TABLE.iter() {
            let mut decoder = MorseDecoder::new();
            decoder.decode_all(spaced(pattern));
            decoder.decode(Signal::PauseLong);
            assert_eq!(decoder.output(), format!("{symbol} "));
        }
    }

    #[test]
    fn test_same_prefix_same_cursor() {
        let prefix = parse_signals("-,-,.").unwrap();
        let mut first = MorseDecoder::new();
        let mut second = MorseDecoder::new();
        first.decode_all(prefix.iter().copied());
        second.decode_all(prefix.iter().copied());
        assert_eq!(first.cursor(), second.cursor());
        assert_ne!(first.cursor(), Cursor::Error);
    }

    #[test]
    fn test_over_length_code_is_undefined() {
        let decoder = decode_str(".,.,.,.,.,./");
        assert_eq!(decoder.output(), UNDEFINED_CODE_MARKER);
        assert_eq!(decoder.stats().undefined_codes, 1);
        assert_eq!(decoder.cursor(), Cursor::Node(NodeId::ROOT));
    }

    #[test]
    fn test_error_cursor_is_sticky() {
        init_tracing();
        let mut decoder = MorseDecoder::new();
        // .-.- is Ä; a dit after it leaves the tree.
        decoder.decode_all(parse_signals(".,-,.,-,.").unwrap());
        assert_eq!(decoder.cursor(), Cursor::Error);
        decoder.decode_all(parse_signals(",-,.").unwrap());
        assert_eq!(decoder.cursor(), Cursor::Error);
        decoder.decode(Signal::PauseLong);
        assert_eq!(decoder.output(), "-ERROR- ");

        decoder.decode_all(parse_signals("./").unwrap());
        assert_eq!(decoder.output(), "-ERROR- E");
    }

    #[test]
    fn test_repeat_mark_on_error_cursor() {
        init_tracing();
        let mut decoder = MorseDecoder::new();
        decoder.decode_all(parse_signals(".,.,.,.,.,.").unwrap());
        assert_eq!(decoder.cursor(), Cursor::Error);
        assert_eq!(decoder.last_signal(), Signal::Dit);

        decoder.decode(Signal::Dah);
        assert_eq!(decoder.output(), PROTOCOL_VIOLATION_MARKER);
        assert_eq!(decoder.cursor(), Cursor::Error);
        assert_eq!(decoder.last_signal(), Signal::Dit);

        decoder.decode(Signal::PauseMedium);
        assert_eq!(decoder.output(), "(E!)-ERROR-");
        assert_eq!(decoder.stats().protocol_violations, 1);
        assert_eq!(decoder.stats().undefined_codes, 1);
    }

    #[test]
    fn test_empty_boundary_marker() {
        let decoder = decode_str("-//");
        assert_eq!(decoder.output(), "T-INITIAL-");
        assert_eq!(decoder.stats().empty_boundaries, 1);
    }

    #[test]
    fn test_empty_boundary_skip() {
        let params = MorseDecodeParams {
            empty_boundary: EmptyBoundary::Skip,
            ..Default::default()
        };
        let mut decoder = MorseDecoder::with_params(&params);
        decoder.decode_all(parse_signals("-/|-,-/").unwrap());
        assert_eq!(decoder.output(), "T M");
        assert_eq!(decoder.stats().empty_boundaries, 1);
    }

    #[test]
    fn test_short_pause_keeps_cursor() {
        init_tracing();
        let mut decoder = MorseDecoder::new();
        decoder.decode(Signal::Dit);
        let cursor = decoder.cursor();
        decoder.decode(Signal::PauseShort);
        assert_eq!(decoder.cursor(), cursor);
        assert_eq!(decoder.last_signal(), Signal::PauseShort);
        assert_eq!(decoder.output(), "");
    }

    #[test]
    fn test_output_readable_mid_stream() {
        init_tracing();
        let mut decoder = MorseDecoder::new();
        decoder.decode_all(parse_signals("-,-/-,-,").unwrap());
        assert_eq!(decoder.output(), "M");
        decoder.decode_all(parse_signals("-/").unwrap());
        assert_eq!(decoder.output(), "MO");
    }

    #[test]
    fn test_sessions_with_take_output() {
        let mut decoder = decode_str(
            "-,-/ -,-,-/ .,-,./ .,.,./ .| -,.,-,./ -,-,-/ -,.,./ ./",
        );
        assert_eq!(decoder.output(), "MORSE CODE");

        decoder.decode_all(parse_signals("./").unwrap());
        let first = decoder.take_output();
        assert_eq!(first, "MORSE CODEE");

        decoder.decode_all(
            parse_signals(
                ".,-,./ .,-/ -,.,./ .,./ -,-,-/ .,-/ -,.,-,./ -/ .,./ .,.,.,-/ .,./ -/ -,.,-,-|",
            )
            .unwrap(),
        );
        assert_eq!(decoder.output(), "RADIOACTIVITY ");
    }

    #[test]
    fn test_reset() {
        let mut decoder = decode_str("..-");
        assert_ne!(decoder.output(), "");
        decoder.reset();
        assert_eq!(decoder.output(), "");
        assert_eq!(decoder.cursor(), Cursor::Node(NodeId::ROOT));
        assert_eq!(decoder.last_signal(), Signal::PauseLong);
        assert_eq!(decoder.stats(), &DecodeStats::default());

        decoder.decode_all(parse_signals("-,-,-,-/").unwrap());
        assert_eq!(decoder.output(), "CH");
    }

    #[test]
    fn test_umlauts_and_ampersand() {
        let decoder = decode_str(".,-,.,-/ -,-,-,./ .,.,-,-/ .,-,.,.,.|");
        assert_eq!(decoder.output(), "ÄÖÜ& ");
    }

    #[test]
    fn test_custom_tree() {
        const S: &[Mark] = &[Mark::Dit, Mark::Dit, Mark::Dit];
        let tree = MorseTree::from_table(&[(Symbol::S, S)]);
        let mut decoder = MorseDecoder::with_tree(&tree, &MorseDecodeParams::default());
        decoder.decode_all(parse_signals(".,.,./ ./").unwrap());
        assert_eq!(decoder.output(), "S-ERROR-");
    }

    #[test]
    fn test_decode_signals_stats() {
        let signals = parse_signals(".,-/ ../ .,.,.,.,.,./ /").unwrap();
        let result = decode_signals(&signals, &MorseDecodeParams::default());
        assert_eq!(result.text, "A(E!)E-ERROR--INITIAL-");
        assert_eq!(result.stats.signals_processed, signals.len());
        assert_eq!(result.stats.characters_decoded, 2);
        assert_eq!(result.stats.protocol_violations, 1);
        assert_eq!(result.stats.undefined_codes, 1);
        assert_eq!(result.stats.empty_boundaries, 1);
    }

    #[test]
    fn test_decode_signals_consumes_long_input() {
        let signals: Vec<Signal> = std::iter::repeat([Signal::Dit, Signal::PauseMedium])
            .take(1500)
            .flatten()
            .collect();
        let result = decode_signals(&signals, &MorseDecodeParams::default());
        assert_eq!(result.stats.signals_processed, signals.len());
        assert_eq!(result.text.len(), 1500);
        assert!(!result.stats.truncated);
    }

    #[test]
    fn test_decode_signals_output_limit() {
        let params = MorseDecodeParams {
            max_output_length: Some(2),
            ..Default::default()
        };
        let signals = parse_signals("./ ./ ./").unwrap();
        let result = decode_signals(&signals, &params);
        assert_eq!(result.text, "EE");
        assert_eq!(result.stats.signals_processed, 4);
        assert!(result.stats.truncated);
    }

    #[test]
    fn test_decode_signals_limit_on_last_signal() {
        let params = MorseDecodeParams {
            max_output_length: Some(2),
            ..Default::default()
        };
        let signals = parse_signals("./ ./").unwrap();
        let result = decode_signals(&signals, &params);
        assert_eq!(result.text, "EE");
        assert!(!result.stats.truncated);
    }

    #[test]
    fn test_decode_notation_error() {
        let result = decode_notation(".,x", &MorseDecodeParams::default());
        assert!(matches!(
            result,
            Err(DecodeError::UnknownToken { token: 'x', position: 2 })
        ));
    }
}

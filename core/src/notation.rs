// Compact text notation for signal streams
// `.` dit, `-` dah, `,` short pause, `/` medium pause, `|` long pause
use std::fmt;
use std::str::FromStr;

use crate::error::DecodeError;
use crate::types::Signal;

impl Signal {
    /// Notation character for this signal.
    pub fn as_char(self) -> char {
        match self {
            Signal::Dit => '.',
            Signal::Dah => '-',
            Signal::PauseShort => ',',
            Signal::PauseMedium => '/',
            Signal::PauseLong => '|',
        }
    }

    pub fn from_char(ch: char) -> Option<Signal> {
        match ch {
            '.' => Some(Signal::Dit),
            '-' => Some(Signal::Dah),
            ',' => Some(Signal::PauseShort),
            '/' => Some(Signal::PauseMedium),
            '|' => Some(Signal::PauseLong),
            _ => None,
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Signal {
    type Err = DecodeError;

    /// Accepts the serialized names (`pauseShort`), snake case (`pause_short`)
    /// or a single notation character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            if let Some(signal) = Signal::from_char(ch) {
                return Ok(signal);
            }
        }

        let normalized: String = trimmed
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "dit" => Ok(Signal::Dit),
            "dah" => Ok(Signal::Dah),
            "pauseshort" => Ok(Signal::PauseShort),
            "pausemedium" => Ok(Signal::PauseMedium),
            "pauselong" => Ok(Signal::PauseLong),
            _ => Err(DecodeError::UnknownSignal(s.to_string())),
        }
    }
}

/// Parse a notation string into signals, ignoring ASCII whitespace.
pub fn parse_signals(notation: &str) -> Result<Vec<Signal>, DecodeError> {
    notation
        .chars()
        .enumerate()
        .filter(|(_, ch)| !ch.is_ascii_whitespace())
        .map(|(position, token)| {
            Signal::from_char(token).ok_or(DecodeError::UnknownToken { token, position })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_letter_a() {
        let signals = parse_signals(".,-/").unwrap();
        assert_eq!(
            signals,
            vec![
                Signal::Dit,
                Signal::PauseShort,
                Signal::Dah,
                Signal::PauseMedium
            ]
        );
    }

    #[test]
    fn test_whitespace_is_ignored() {
        let compact = parse_signals(".,-/-,-,-|").unwrap();
        let spaced = parse_signals(" . , - /\n- , - , - | ").unwrap();
        assert_eq!(compact, spaced);
    }

    #[test]
    fn test_unknown_token_reports_position() {
        match parse_signals("..x") {
            Err(DecodeError::UnknownToken { token, position }) => {
                assert_eq!(token, 'x');
                assert_eq!(position, 2);
            }
            other => panic!("expected unknown token, got {other:?}"),
        }
    }

    #[test]
    fn test_signal_names() {
        assert_eq!("dit".parse::<Signal>().unwrap(), Signal::Dit);
        assert_eq!("DAH".parse::<Signal>().unwrap(), Signal::Dah);
        assert_eq!("pauseShort".parse::<Signal>().unwrap(), Signal::PauseShort);
        assert_eq!("pause_medium".parse::<Signal>().unwrap(), Signal::PauseMedium);
        assert_eq!("|".parse::<Signal>().unwrap(), Signal::PauseLong);
        assert!(matches!(
            "dot".parse::<Signal>(),
            Err(DecodeError::UnknownSignal(_))
        ));
    }

    #[test]
    fn test_display_matches_notation() {
        for signal in Signal::ALL {
            assert_eq!(signal.to_string(), signal.as_char().to_string());
            assert_eq!(Signal::from_char(signal.as_char()), Some(signal));
        }
    }
}

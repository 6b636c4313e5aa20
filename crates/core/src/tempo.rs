//! Repetition tempo.
//!
//! A tempo is written as four digits, each the number of seconds spent in one
//! phase of a single repetition: eccentric, bottom pause, concentric, top
//! pause. `"2010"` is two seconds down, no pause, one second up, no pause.

use serde::{Deserialize, Serialize};

/// A parsed four-phase tempo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tempo {
    /// Lowering phase, in seconds
    pub eccentric: u8,

    /// Pause at the bottom, in seconds
    pub bottom_pause: u8,

    /// Lifting phase, in seconds
    pub concentric: u8,

    /// Pause at the top, in seconds
    pub top_pause: u8,
}

impl Tempo {
    /// Parse a tempo string.
    ///
    /// Returns `None` unless the input is exactly four ASCII digits.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 4 || !bytes.iter().all(u8::is_ascii_digit) {
            return None;
        }

        let digit = |i: usize| bytes[i] - b'0';
        Some(Self {
            eccentric: digit(0),
            bottom_pause: digit(1),
            concentric: digit(2),
            top_pause: digit(3),
        })
    }

    /// Seconds taken by one repetition at this tempo.
    pub fn seconds_per_rep(&self) -> u32 {
        u32::from(self.eccentric)
            + u32::from(self.bottom_pause)
            + u32::from(self.concentric)
            + u32::from(self.top_pause)
    }
}

impl std::fmt::Display for Tempo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.eccentric, self.bottom_pause, self.concentric, self.top_pause
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_tempo() {
        let tempo = Tempo::parse("2010").unwrap();
        assert_eq!(tempo.eccentric, 2);
        assert_eq!(tempo.bottom_pause, 0);
        assert_eq!(tempo.concentric, 1);
        assert_eq!(tempo.top_pause, 0);
        assert_eq!(tempo.seconds_per_rep(), 3);
        assert_eq!(tempo.to_string(), "2010");
    }

    #[test]
    fn test_parse_all_zero_tempo_is_valid() {
        let tempo = Tempo::parse("0000").unwrap();
        assert_eq!(tempo.seconds_per_rep(), 0);
    }

    #[test]
    fn test_parse_rejects_malformed_tempo() {
        assert!(Tempo::parse("invalid").is_none());
        assert!(Tempo::parse("201").is_none());
        assert!(Tempo::parse("20100").is_none());
        assert!(Tempo::parse("2a10").is_none());
        assert!(Tempo::parse("2 10").is_none());
        assert!(Tempo::parse("-101").is_none());
        assert!(Tempo::parse("").is_none());
        // Four chars, but not four bytes of ASCII digits
        assert!(Tempo::parse("２０１０").is_none());
    }

    #[test]
    fn test_max_tempo() {
        assert_eq!(Tempo::parse("9999").unwrap().seconds_per_rep(), 36);
    }
}

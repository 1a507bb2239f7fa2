//! Duration tokens shared by motifs, preset lines and voice settings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A transport duration token.
///
/// Serialized with the transport notation the playback layer schedules with
/// (`"1m"`, `"1n"`, `"2n"`, `"4n"`, `"8n"`, `"16n"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoteLength {
    /// One 4/4 measure.
    #[serde(rename = "1m")]
    Measure,
    /// Whole note.
    #[serde(rename = "1n")]
    Whole,
    /// Half note.
    #[serde(rename = "2n")]
    Half,
    /// Quarter note.
    #[serde(rename = "4n")]
    Quarter,
    /// Eighth note.
    #[serde(rename = "8n")]
    Eighth,
    /// Sixteenth note.
    #[serde(rename = "16n")]
    Sixteenth,
}

impl NoteLength {
    /// Transport notation for this length.
    pub fn token(&self) -> &'static str {
        match self {
            NoteLength::Measure => "1m",
            NoteLength::Whole => "1n",
            NoteLength::Half => "2n",
            NoteLength::Quarter => "4n",
            NoteLength::Eighth => "8n",
            NoteLength::Sixteenth => "16n",
        }
    }

    /// Length in quarter-note beats, assuming 4/4.
    pub fn beats(&self) -> f64 {
        match self {
            NoteLength::Measure | NoteLength::Whole => 4.0,
            NoteLength::Half => 2.0,
            NoteLength::Quarter => 1.0,
            NoteLength::Eighth => 0.5,
            NoteLength::Sixteenth => 0.25,
        }
    }
}

impl fmt::Display for NoteLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Error for an unrecognised duration token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown duration token '{0}'")]
pub struct ParseNoteLengthError(pub String);

impl FromStr for NoteLength {
    type Err = ParseNoteLengthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1m" => Ok(NoteLength::Measure),
            "1n" => Ok(NoteLength::Whole),
            "2n" => Ok(NoteLength::Half),
            "4n" => Ok(NoteLength::Quarter),
            "8n" => Ok(NoteLength::Eighth),
            "16n" => Ok(NoteLength::Sixteenth),
            other => Err(ParseNoteLengthError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip_through_from_str() {
        for len in [
            NoteLength::Measure,
            NoteLength::Whole,
            NoteLength::Half,
            NoteLength::Quarter,
            NoteLength::Eighth,
            NoteLength::Sixteenth,
        ] {
            assert_eq!(len.token().parse::<NoteLength>().unwrap(), len);
        }
        assert!("3n".parse::<NoteLength>().is_err());
    }

    #[test]
    fn test_serializes_as_transport_token() {
        assert_eq!(serde_json::to_string(&NoteLength::Eighth).unwrap(), r#""8n""#);
        let parsed: NoteLength = serde_json::from_str(r#""1m""#).unwrap();
        assert_eq!(parsed, NoteLength::Measure);
    }

    #[test]
    fn test_beats() {
        assert_eq!(NoteLength::Sixteenth.beats(), 0.25);
        assert_eq!(NoteLength::Half.beats(), 2.0);
        assert_eq!(NoteLength::Measure.beats(), NoteLength::Whole.beats());
    }
}

//! Per-voice performance settings.

use serde::{Deserialize, Serialize};

use crate::note::NoteLength;

/// Fewest active voices.
pub const MIN_VOICES: u8 = 1;
/// Most active voices.
pub const MAX_VOICES: u8 = 3;

/// Clamps a requested voice count into `MIN_VOICES..=MAX_VOICES`.
pub fn clamp_voices(requested: u32) -> u8 {
    requested.clamp(MIN_VOICES as u32, MAX_VOICES as u32) as u8
}

/// Fully resolved voice settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VoiceSettings {
    /// Delay between successive canon entries.
    pub entry_interval: NoteLength,
    /// Velocity multiplier per voice (index 0 is the lead voice).
    pub velocity_profile: Vec<f64>,
    /// Transposition in semitones per voice.
    pub transpose: Vec<i32>,
    /// Active voices (1..=3).
    pub voices: u8,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            entry_interval: NoteLength::Measure,
            velocity_profile: vec![1.0, 0.8, 0.68],
            transpose: vec![0, -12, -5],
            voices: MAX_VOICES,
        }
    }
}

impl VoiceSettings {
    /// Overwrites every field the override sets.
    pub fn apply(&mut self, overrides: &VoiceSettingsOverride) {
        if let Some(entry_interval) = overrides.entry_interval {
            self.entry_interval = entry_interval;
        }
        if let Some(ref velocity_profile) = overrides.velocity_profile {
            self.velocity_profile = velocity_profile.clone();
        }
        if let Some(ref transpose) = overrides.transpose {
            self.transpose = transpose.clone();
        }
        if let Some(voices) = overrides.voices {
            self.voices = clamp_voices(voices as u32);
        }
    }

    /// Velocity multiplier for an active voice.
    pub fn velocity(&self, voice: usize) -> Option<f64> {
        self.is_active(voice)
            .then(|| self.velocity_profile.get(voice).copied())
            .flatten()
    }

    /// Transposition for an active voice.
    pub fn transpose(&self, voice: usize) -> Option<i32> {
        self.is_active(voice)
            .then(|| self.transpose.get(voice).copied())
            .flatten()
    }

    /// Entry delay of a voice in quarter-note beats.
    pub fn entry_offset_beats(&self, voice: usize) -> f64 {
        voice as f64 * self.entry_interval.beats()
    }

    fn is_active(&self, voice: usize) -> bool {
        voice < self.voices as usize
    }
}

/// Partial voice settings a variation may override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VoiceSettingsOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_interval: Option<NoteLength>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub velocity_profile: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transpose: Option<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voices: Option<u8>,
}

impl VoiceSettingsOverride {
    pub fn is_empty(&self) -> bool {
        self.entry_interval.is_none()
            && self.velocity_profile.is_none()
            && self.transpose.is_none()
            && self.voices.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clamp_voices() {
        assert_eq!(clamp_voices(0), 1);
        assert_eq!(clamp_voices(2), 2);
        assert_eq!(clamp_voices(10), 3);
    }

    #[test]
    fn test_apply_override_keeps_unset_fields() {
        let mut settings = VoiceSettings::default();
        settings.apply(&VoiceSettingsOverride {
            entry_interval: Some(NoteLength::Half),
            transpose: Some(vec![0, -12, 12]),
            ..Default::default()
        });
        assert_eq!(settings.entry_interval, NoteLength::Half);
        assert_eq!(settings.transpose, vec![0, -12, 12]);
        assert_eq!(settings.velocity_profile, vec![1.0, 0.8, 0.68]);
        assert_eq!(settings.voices, 3);
    }

    #[test]
    fn test_per_voice_accessors_respect_active_count() {
        let settings = VoiceSettings {
            voices: 2,
            ..Default::default()
        };
        assert_eq!(settings.velocity(1), Some(0.8));
        assert_eq!(settings.velocity(2), None);
        assert_eq!(settings.transpose(0), Some(0));
        assert_eq!(settings.entry_offset_beats(2), 8.0);
    }

    #[test]
    fn test_override_deserializes_partially() {
        let parsed: VoiceSettingsOverride =
            serde_json::from_str(r#"{ "entry_interval": "2n" }"#).unwrap();
        assert_eq!(parsed.entry_interval, Some(NoteLength::Half));
        assert!(parsed.velocity_profile.is_none());
        assert!(!parsed.is_empty());
        assert!(VoiceSettingsOverride::default().is_empty());
    }
}

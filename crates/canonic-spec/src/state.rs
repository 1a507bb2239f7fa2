//! Request and response types at the generator boundary.

use serde::{Deserialize, Serialize};

use crate::chord::Chord;
use crate::degree::Degree;
use crate::voice::VoiceSettings;

/// Options for assembling a canon state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StateOptions {
    /// Preferred variation; unknown or unset means any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation: Option<String>,
    /// Voice count, clamped to 1..=3.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_voices: Option<u32>,
}

impl StateOptions {
    pub fn variation(name: impl Into<String>) -> Self {
        Self {
            variation: Some(name.into()),
            requested_voices: None,
        }
    }

    pub fn with_voices(mut self, voices: u32) -> Self {
        self.requested_voices = Some(voices);
        self
    }
}

/// The assembled output of one generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CanonState {
    pub chords: Vec<Chord>,
    pub voice_settings: VoiceSettings,
    /// Offset counted from the top of the scale array.
    pub base_scale_offset: i32,
    pub variation_name: String,
    pub anchor_trend: Vec<i32>,
    pub degrees: Vec<Degree>,
}

impl CanonState {
    /// Base scale index for a scale of `scale_length` entries.
    ///
    /// The offset counts down from the top entry; the result saturates at 0.
    pub fn base_scale_index(&self, scale_length: usize) -> i32 {
        let top = scale_length.saturating_sub(1).min(i32::MAX as usize) as i32;
        top.saturating_sub(self.base_scale_offset).max(0)
    }

    /// Melody request matching this state.
    pub fn melody_params(&self, scale_length: usize) -> MelodyParams {
        MelodyParams {
            variation_name: self.variation_name.clone(),
            anchor_trend: self.anchor_trend.clone(),
            base_scale_index: self.base_scale_index(scale_length),
            scale_length,
            degrees: self.degrees.clone(),
        }
    }
}

/// Inputs for rendering a melody.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MelodyParams {
    /// Variation to render; unknown names fall back to the first registered one.
    pub variation_name: String,
    /// Contour offsets; empty means sample one.
    #[serde(default)]
    pub anchor_trend: Vec<i32>,
    pub base_scale_index: i32,
    /// Number of entries in the expanded scale array.
    pub scale_length: usize,
    pub degrees: Vec<Degree>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(offset: i32) -> CanonState {
        CanonState {
            chords: Vec::new(),
            voice_settings: VoiceSettings::default(),
            base_scale_offset: offset,
            variation_name: "classic".to_string(),
            anchor_trend: vec![0, 1],
            degrees: vec![Degree::TONIC, Degree::DOMINANT],
        }
    }

    #[test]
    fn test_base_scale_index_counts_from_top() {
        assert_eq!(state(4).base_scale_index(15), 10);
        assert_eq!(state(20).base_scale_index(15), 0);
        assert_eq!(state(3).base_scale_index(0), 0);
    }

    #[test]
    fn test_melody_params_copy_state_fields() {
        let params = state(3).melody_params(15);
        assert_eq!(params.variation_name, "classic");
        assert_eq!(params.base_scale_index, 11);
        assert_eq!(params.scale_length, 15);
        assert_eq!(params.degrees.len(), 2);
    }

    #[test]
    fn test_state_options_builder() {
        let options = StateOptions::variation("lofi-rise").with_voices(2);
        assert_eq!(options.variation.as_deref(), Some("lofi-rise"));
        assert_eq!(options.requested_voices, Some(2));
        let parsed: StateOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, StateOptions::default());
    }
}

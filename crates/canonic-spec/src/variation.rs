//! Named canon configurations.

use serde::{Deserialize, Serialize};

use crate::degree::Degree;
use crate::melody::StepTemplate;
use crate::motif::MotifGroups;
use crate::voice::VoiceSettingsOverride;

/// Inclusive `[min, max]` range the base scale offset is sampled from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OffsetRange(pub f64, pub f64);

impl OffsetRange {
    pub fn min(&self) -> f64 {
        self.0
    }

    pub fn max(&self) -> f64 {
        self.1
    }
}

/// Offset range for variations that do not declare one.
pub const DEFAULT_OFFSET_RANGE: OffsetRange = OffsetRange(3.0, 5.0);

/// A named canon configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Variation {
    pub name: String,
    /// Degree progression; one canon entry per degree.
    pub pattern: Vec<Degree>,
    /// Static melodies used when generation yields nothing.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub melody_patterns: Vec<Vec<StepTemplate>>,
    #[serde(default, skip_serializing_if = "VoiceSettingsOverride::is_empty")]
    pub voice_settings: VoiceSettingsOverride,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_scale_offset: Option<OffsetRange>,
    /// Candidate contours, one offset per degree.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub anchor_trends: Vec<Vec<i32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motif_groups: Option<MotifGroups>,
    /// Hand-authored line per degree position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset_lines: Option<Vec<Vec<StepTemplate>>>,
}

impl Variation {
    /// A variation with only a name and a degree pattern.
    pub fn new(name: impl Into<String>, pattern: Vec<Degree>) -> Self {
        Self {
            name: name.into(),
            pattern,
            melody_patterns: Vec::new(),
            voice_settings: VoiceSettingsOverride::default(),
            base_scale_offset: None,
            anchor_trends: Vec::new(),
            motif_groups: None,
            preset_lines: None,
        }
    }

    /// Preset lines, if their count matches `degree_count`.
    pub fn preset_lines_for(&self, degree_count: usize) -> Option<&[Vec<StepTemplate>]> {
        self.preset_lines
            .as_deref()
            .filter(|lines| lines.len() == degree_count)
    }

    pub fn offset_range(&self) -> OffsetRange {
        self.base_scale_offset.unwrap_or(DEFAULT_OFFSET_RANGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::NoteLength;

    fn line() -> Vec<StepTemplate> {
        vec![StepTemplate::offset(0, NoteLength::Eighth, 1.0)]
    }

    #[test]
    fn test_preset_lines_require_matching_count() {
        let mut variation = Variation::new("v", vec![Degree::TONIC, Degree::DOMINANT]);
        assert!(variation.preset_lines_for(2).is_none());

        variation.preset_lines = Some(vec![line(), line()]);
        assert_eq!(variation.preset_lines_for(2).map(|l| l.len()), Some(2));
        assert!(variation.preset_lines_for(3).is_none());
    }

    #[test]
    fn test_offset_range_default() {
        let variation = Variation::new("v", vec![Degree::TONIC]);
        assert_eq!(variation.offset_range(), DEFAULT_OFFSET_RANGE);
    }

    #[test]
    fn test_minimal_json() {
        let parsed: Variation =
            serde_json::from_str(r#"{ "name": "mini", "pattern": [1, 4, 5, 1] }"#).unwrap();
        assert_eq!(parsed.pattern.len(), 4);
        assert!(parsed.motif_groups.is_none());
        assert!(serde_json::from_str::<Variation>(r#"{ "name": "x", "pattern": [8] }"#).is_err());
    }
}

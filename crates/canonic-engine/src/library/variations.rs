//! Built-in canon variations.

use canonic_spec::{
    motif_groups, Degree, MotifGroup, NoteLength, OffsetRange, Variation, VoiceSettingsOverride,
};

use super::presets;

/// Contours used by variations without their own candidates.
pub fn default_anchor_trends() -> Vec<Vec<i32>> {
    vec![vec![0, 1, 2, 3, 4, 4, 3, 2], vec![0, 1, 2, 3, 4, 5, 4, 3]]
}

/// The three built-in variations, in registration order.
pub fn builtin_variations() -> Vec<Variation> {
    vec![classic(), lofi_passing(), lofi_rise()]
}

fn pattern(degrees: [Degree; 8]) -> Vec<Degree> {
    degrees.to_vec()
}

pub fn classic() -> Variation {
    use Degree as D;
    let mut variation = Variation::new(
        "classic",
        pattern([
            D::TONIC,
            D::DOMINANT,
            D::RELATIVE,
            D::MEDIANT,
            D::PREDOMINANT,
            D::TONIC,
            D::PREDOMINANT,
            D::DOMINANT,
        ]),
    );
    variation.melody_patterns = vec![presets::descending_pattern()];
    variation.base_scale_offset = Some(OffsetRange(3.0, 4.0));
    variation.anchor_trends = vec![vec![0, 1, 2, 3, 4, 4, 3, 2], vec![0, 1, 2, 3, 4, 5, 4, 3]];
    variation.motif_groups = Some(motif_groups(&[
        (MotifGroup::Opening, &["descent", "arpeggio"]),
        (MotifGroup::Tonic, &["descent", "turn"]),
        (MotifGroup::Dominant, &["turn", "cadenceLift"]),
        (MotifGroup::Relative, &["ripple", "descent"]),
        (MotifGroup::Predominant, &["wideDescent", "arpeggio"]),
        (MotifGroup::Cadence, &["cadenceFall", "cadenceLift"]),
        (MotifGroup::Default, &["descent", "turn", "arpeggio"]),
    ]));
    variation.preset_lines = Some(presets::classic_lines());
    variation
}

pub fn lofi_passing() -> Variation {
    use Degree as D;
    let mut variation = Variation::new(
        "lofi-passing",
        pattern([
            D::TONIC,
            D::DOMINANT,
            D::RELATIVE,
            D::MEDIANT,
            D::PREDOMINANT,
            D::TONIC,
            D::SUPERTONIC,
            D::DOMINANT,
        ]),
    );
    variation.melody_patterns = vec![presets::passing_pattern()];
    variation.voice_settings = VoiceSettingsOverride {
        velocity_profile: Some(vec![1.0, 0.78, 0.65]),
        transpose: Some(vec![0, -7, 5]),
        ..Default::default()
    };
    variation.base_scale_offset = Some(OffsetRange(4.0, 5.0));
    variation.anchor_trends = vec![vec![0, 1, 2, 3, 3, 4, 3, 2], vec![0, 1, 2, 2, 3, 4, 3, 1]];
    variation.motif_groups = Some(motif_groups(&[
        (MotifGroup::Opening, &["turn", "lift"]),
        (MotifGroup::Tonic, &["descent", "turn"]),
        (MotifGroup::Dominant, &["turn", "lift", "cadenceLift"]),
        (MotifGroup::Relative, &["ripple", "turn"]),
        (MotifGroup::Predominant, &["wideDescent", "ripple"]),
        (MotifGroup::Mediant, &["arpeggio", "turn"]),
        (MotifGroup::Cadence, &["cadenceFall", "sustain"]),
        (MotifGroup::Default, &["turn", "ripple", "descent"]),
    ]));
    variation.preset_lines = Some(presets::passing_lines());
    variation
}

pub fn lofi_rise() -> Variation {
    use Degree as D;
    let mut variation = Variation::new(
        "lofi-rise",
        pattern([
            D::TONIC,
            D::DOMINANT,
            D::MEDIANT,
            D::RELATIVE,
            D::PREDOMINANT,
            D::TONIC,
            D::PREDOMINANT,
            D::DOMINANT,
        ]),
    );
    variation.melody_patterns = vec![presets::rising_pattern()];
    variation.voice_settings = VoiceSettingsOverride {
        entry_interval: Some(NoteLength::Half),
        velocity_profile: Some(vec![1.0, 0.82, 0.72]),
        transpose: Some(vec![0, -12, 12]),
        voices: None,
    };
    variation.base_scale_offset = Some(OffsetRange(2.0, 4.0));
    variation.anchor_trends = vec![vec![0, 1, 1, 2, 3, 4, 3, 2], vec![0, 0, 1, 2, 3, 4, 2, 1]];
    variation.motif_groups = Some(motif_groups(&[
        (MotifGroup::Opening, &["lift", "descent"]),
        (MotifGroup::Tonic, &["lift", "turn"]),
        (MotifGroup::Dominant, &["lift", "cadenceLift"]),
        (MotifGroup::Relative, &["ripple", "lift"]),
        (MotifGroup::Predominant, &["wideDescent", "turn"]),
        (MotifGroup::Cadence, &["cadenceLift", "cadenceFall"]),
        (MotifGroup::Default, &["lift", "turn", "descent"]),
    ]));
    variation.preset_lines = Some(presets::rise_lines());
    variation
}

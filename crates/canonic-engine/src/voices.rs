//! Voice settings resolver.

use canonic_spec::{clamp_voices, Variation, VoiceSettings};

/// Defaults, then the variation's overrides, then the caller's voice count.
pub fn resolve_voice_settings(variation: &Variation, requested: Option<u32>) -> VoiceSettings {
    let mut settings = VoiceSettings::default();
    settings.apply(&variation.voice_settings);
    if let Some(voices) = requested {
        settings.voices = clamp_voices(voices);
    }
    settings
}

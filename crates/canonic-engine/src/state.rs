//! State assembler: the top-level entry for one canon request.

use log::debug;
use rand::Rng;

use canonic_spec::{CanonState, ChordCatalog, Registry, StateOptions};

use crate::chords::build_chords;
use crate::compose::GenerateError;
use crate::rng::sample_range;
use crate::select::{pick_anchor_trend, pick_variation};
use crate::voices::resolve_voice_settings;

/// Assembles a canon state.
///
/// Picks a variation, builds its chords, resolves voice settings, samples the
/// base scale offset (rounded half away from zero) and picks an anchor trend.
pub fn generate_canon_state<R: Rng + ?Sized>(
    registry: &Registry,
    catalog: &dyn ChordCatalog,
    options: &StateOptions,
    rng: &mut R,
) -> Result<CanonState, GenerateError> {
    let variation = pick_variation(registry, options.variation.as_deref(), rng)
        .ok_or(GenerateError::NoVariations)?;
    let chords = build_chords(catalog, &variation.pattern)?;
    let voice_settings = resolve_voice_settings(variation, options.requested_voices);

    let range = variation.offset_range();
    let base_scale_offset = sample_range(rng, range.min(), range.max()).round() as i32;
    let anchor_trend = pick_anchor_trend(registry, variation, rng);

    debug!(
        "state: variation '{}', {} voices, offset {}, trend {:?}",
        variation.name, voice_settings.voices, base_scale_offset, anchor_trend
    );

    Ok(CanonState {
        chords,
        voice_settings,
        base_scale_offset,
        variation_name: variation.name.clone(),
        anchor_trend,
        degrees: variation.pattern.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::builtin_registry;
    use crate::rng::rng_for;
    use canonic_spec::{CatalogEntry, ConfigError, Degree, DiatonicCatalog};
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_classic_state() {
        let registry = builtin_registry();
        let mut rng = rng_for(11, "state", "");
        let state = generate_canon_state(
            &registry,
            &DiatonicCatalog::major(),
            &StateOptions::variation("classic"),
            &mut rng,
        )
        .unwrap();
        assert_eq!(state.variation_name, "classic");
        assert_eq!(state.chords.len(), state.degrees.len());
        assert!((3..=4).contains(&state.base_scale_offset));
        assert!(registry.variations[0].anchor_trends.contains(&state.anchor_trend));
    }

    #[test]
    fn test_zero_stream_takes_range_minimum() {
        let registry = builtin_registry();
        let state = generate_canon_state(
            &registry,
            &DiatonicCatalog::major(),
            &StateOptions::variation("lofi-rise"),
            &mut StepRng::new(0, 0),
        )
        .unwrap();
        assert_eq!(state.base_scale_offset, 2);
        assert_eq!(state.anchor_trend, vec![0, 1, 1, 2, 3, 4, 3, 2]);
    }

    #[test]
    fn test_short_catalog_is_config_error() {
        let registry = builtin_registry();
        let catalog = DiatonicCatalog::from_entries(vec![CatalogEntry::new(&[0, 4, 7], &[1])]);
        let err = generate_canon_state(
            &registry,
            &catalog,
            &StateOptions::variation("classic"),
            &mut StepRng::new(0, 0),
        )
        .unwrap_err();
        assert_eq!(
            err,
            GenerateError::Config(ConfigError::DegreeOutOfRange {
                degree: Degree::DOMINANT.get(),
                len: 1
            })
        );
    }
}

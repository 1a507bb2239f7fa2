//! Registry validation against a chord catalog.

use std::collections::HashSet;

use crate::chord::ChordCatalog;
use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::melody::StepTemplate;
use crate::motif::{Motif, MotifGroups, MotifLibrary};
use crate::registry::Registry;
use crate::variation::Variation;
use crate::voice::MAX_VOICES;

/// Validates a registry and returns a validation result.
///
/// Errors mark configuration the generator cannot run with; warnings mark
/// configuration that silently routes generation through a fallback.
pub fn validate_registry(registry: &Registry, catalog: &dyn ChordCatalog) -> ValidationResult {
    let mut result = ValidationResult::default();

    if registry.variations.is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::EmptyRegistry,
            "registry must declare at least one variation",
            "variations",
        ));
    }

    for (id, motif) in registry.motifs.iter() {
        validate_motif(id, motif, &mut result);
    }

    validate_groups(
        &registry.default_motif_groups,
        &registry.motifs,
        "default_motif_groups",
        &mut result,
    );
    validate_trends(
        &registry.default_anchor_trends,
        "default_anchor_trends",
        &mut result,
    );
    validate_steps(
        &registry.default_melody_pattern,
        "default_melody_pattern",
        &mut result,
    );

    let mut seen = HashSet::new();
    for (idx, variation) in registry.variations.iter().enumerate() {
        let path = format!("variations[{}]", idx);
        if !seen.insert(variation.name.as_str()) {
            result.add_error(ValidationError::with_path(
                ErrorCode::DuplicateVariation,
                format!("duplicate variation name '{}'", variation.name),
                format!("{}.name", path),
            ));
        }
        validate_variation(variation, registry, catalog, &path, &mut result);
    }

    result
}

fn validate_variation(
    variation: &Variation,
    registry: &Registry,
    catalog: &dyn ChordCatalog,
    path: &str,
    result: &mut ValidationResult,
) {
    if variation.pattern.is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::EmptyPattern,
            format!("variation '{}' has an empty degree pattern", variation.name),
            format!("{}.pattern", path),
        ));
    }

    for (i, degree) in variation.pattern.iter().enumerate() {
        if catalog.template_for(*degree).is_none() {
            result.add_error(ValidationError::with_path(
                ErrorCode::DegreeOutOfCatalog,
                format!(
                    "degree {} has no chord template (catalog holds {} entries)",
                    degree,
                    catalog.len()
                ),
                format!("{}.pattern[{}]", path, i),
            ));
        }
    }

    if let Some(ref groups) = variation.motif_groups {
        validate_groups(groups, &registry.motifs, &format!("{}.motif_groups", path), result);
    }
    validate_trends(&variation.anchor_trends, &format!("{}.anchor_trends", path), result);

    if let Some(range) = variation.base_scale_offset {
        if !(range.min() <= range.max()) {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidOffsetRange,
                format!("offset range [{}, {}] has min > max", range.min(), range.max()),
                format!("{}.base_scale_offset", path),
            ));
        }
    }

    let overrides = &variation.voice_settings;
    let voices = MAX_VOICES as usize;
    if overrides
        .velocity_profile
        .as_ref()
        .is_some_and(|v| v.len() < voices)
    {
        result.add_error(ValidationError::with_path(
            ErrorCode::ShortVoiceProfile,
            format!("velocity_profile must cover {} voices", voices),
            format!("{}.voice_settings.velocity_profile", path),
        ));
    }
    if overrides.transpose.as_ref().is_some_and(|t| t.len() < voices) {
        result.add_error(ValidationError::with_path(
            ErrorCode::ShortVoiceProfile,
            format!("transpose must cover {} voices", voices),
            format!("{}.voice_settings.transpose", path),
        ));
    }

    if let Some(ref lines) = variation.preset_lines {
        for (i, line) in lines.iter().enumerate() {
            validate_steps(line, &format!("{}.preset_lines[{}]", path, i), result);
        }
        if lines.len() != variation.pattern.len() {
            result.add_warning(ValidationWarning::with_path(
                WarningCode::PresetCountMismatch,
                format!(
                    "{} preset lines for {} degrees; presets will be ignored",
                    lines.len(),
                    variation.pattern.len()
                ),
                format!("{}.preset_lines", path),
            ));
        }
    }

    for (i, pattern) in variation.melody_patterns.iter().enumerate() {
        validate_steps(pattern, &format!("{}.melody_patterns[{}]", path, i), result);
    }

    if variation.melody_patterns.is_empty() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::MissingFallbackPattern,
            format!(
                "variation '{}' has no melody pattern; the registry default is used",
                variation.name
            ),
            format!("{}.melody_patterns", path),
        ));
    }
}

fn validate_motif(id: &str, motif: &Motif, result: &mut ValidationResult) {
    let path = format!("motifs.{}", id);
    if motif.steps.is_empty() || motif.durations.is_empty() {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidMotif,
            format!("motif '{}' needs at least one step and one duration", id),
            path.clone(),
        ));
    }
    if motif.durations.len() > motif.steps.len() {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidMotif,
            format!(
                "motif '{}' declares {} durations for {} steps",
                id,
                motif.durations.len(),
                motif.steps.len()
            ),
            format!("{}.durations", path),
        ));
    }
    if let Some(ref accents) = motif.accents {
        if accents.iter().any(|a| !(*a >= 0.0)) {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidMotif,
                format!("motif '{}' has a negative accent", id),
                format!("{}.accents", path),
            ));
        }
    }
    if !(0.0..=1.0).contains(&motif.jitter()) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidMotif,
            format!("motif '{}' jitter {} is outside [0, 1]", id, motif.jitter()),
            format!("{}.jitter", path),
        ));
    }
}

fn validate_groups(
    groups: &MotifGroups,
    library: &MotifLibrary,
    path: &str,
    result: &mut ValidationResult,
) {
    for (group, ids) in groups {
        for id in ids.iter().filter(|id| !library.contains(id)) {
            result.add_error(ValidationError::with_path(
                ErrorCode::UnknownMotif,
                format!("unknown motif '{}'", id),
                format!("{}.{}", path, group),
            ));
        }
    }
}

fn validate_trends(trends: &[Vec<i32>], path: &str, result: &mut ValidationResult) {
    for (i, _) in trends.iter().enumerate().filter(|(_, t)| t.is_empty()) {
        result.add_error(ValidationError::with_path(
            ErrorCode::EmptyAnchorTrend,
            "anchor trend candidates must be non-empty",
            format!("{}[{}]", path, i),
        ));
    }
}

fn validate_steps(steps: &[StepTemplate], path: &str, result: &mut ValidationResult) {
    for (i, step) in steps.iter().enumerate().filter(|(_, s)| !(s.accent >= 0.0)) {
        result.add_error(ValidationError::with_path(
            ErrorCode::NegativeStepAccent,
            format!("step accent {} must be >= 0", step.accent),
            format!("{}[{}].accent", path, i),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::{CatalogEntry, DiatonicCatalog};
    use crate::degree::Degree;
    use crate::melody::StepTemplate;
    use crate::motif::{motif_groups, MotifGroup};
    use crate::note::NoteLength;
    use crate::variation::OffsetRange;

    fn base_registry() -> Registry {
        let mut motifs = MotifLibrary::new();
        motifs.insert(
            "descent",
            Motif::new(
                &[0, -1, -2, -3],
                &[NoteLength::Eighth; 4],
                &[1.0, 0.92, 0.9, 0.95],
                0.12,
            ),
        );
        let mut variation = Variation::new("v", vec![Degree::TONIC, Degree::DOMINANT]);
        variation.melody_patterns = vec![vec![StepTemplate::offset(0, NoteLength::Eighth, 1.0)]];
        Registry {
            motifs,
            variations: vec![variation],
            default_motif_groups: motif_groups(&[(MotifGroup::Default, &["descent"])]),
            default_anchor_trends: vec![vec![0, 1, 2]],
            default_melody_pattern: vec![StepTemplate::offset(0, NoteLength::Eighth, 1.0)],
        }
    }

    #[test]
    fn test_valid_registry_passes() {
        let result = validate_registry(&base_registry(), &DiatonicCatalog::major());
        assert!(result.is_ok(), "{:?}", result.errors);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_empty_registry() {
        let mut registry = base_registry();
        registry.variations.clear();
        let result = validate_registry(&registry, &DiatonicCatalog::major());
        assert!(result.has_error(ErrorCode::EmptyRegistry));
    }

    #[test]
    fn test_duplicate_names_and_empty_pattern() {
        let mut registry = base_registry();
        registry.variations.push(Variation::new("v", Vec::new()));
        let result = validate_registry(&registry, &DiatonicCatalog::major());
        assert!(result.has_error(ErrorCode::DuplicateVariation));
        assert!(result.has_error(ErrorCode::EmptyPattern));
    }

    #[test]
    fn test_degree_outside_short_catalog() {
        let catalog = DiatonicCatalog::from_entries(vec![CatalogEntry::new(&[0, 4, 7], &[1])]);
        let result = validate_registry(&base_registry(), &catalog);
        let err = result
            .errors
            .iter()
            .find(|e| e.code == ErrorCode::DegreeOutOfCatalog)
            .unwrap();
        assert_eq!(err.path.as_deref(), Some("variations[0].pattern[1]"));
    }

    #[test]
    fn test_unknown_motif_reference() {
        let mut registry = base_registry();
        registry.variations[0].motif_groups =
            Some(motif_groups(&[(MotifGroup::Cadence, &["missing"])]));
        let result = validate_registry(&registry, &DiatonicCatalog::major());
        let err = result
            .errors
            .iter()
            .find(|e| e.code == ErrorCode::UnknownMotif)
            .unwrap();
        assert_eq!(err.path.as_deref(), Some("variations[0].motif_groups.cadence"));
    }

    #[test]
    fn test_invalid_motif_fields() {
        let mut registry = base_registry();
        registry.motifs.insert(
            "bad",
            Motif {
                steps: vec![0],
                durations: vec![NoteLength::Eighth, NoteLength::Eighth],
                accents: Some(vec![-0.5]),
                jitter: Some(1.5),
            },
        );
        let result = validate_registry(&registry, &DiatonicCatalog::major());
        let count = result
            .errors
            .iter()
            .filter(|e| e.code == ErrorCode::InvalidMotif)
            .count();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_offset_range_voice_profile_and_trend_errors() {
        let mut registry = base_registry();
        let variation = &mut registry.variations[0];
        variation.base_scale_offset = Some(OffsetRange(5.0, 2.0));
        variation.voice_settings.velocity_profile = Some(vec![1.0]);
        variation.voice_settings.transpose = Some(vec![0, 12]);
        variation.anchor_trends = vec![vec![]];
        let result = validate_registry(&registry, &DiatonicCatalog::major());
        assert!(result.has_error(ErrorCode::InvalidOffsetRange));
        assert!(result.has_error(ErrorCode::EmptyAnchorTrend));
        let short = result
            .errors
            .iter()
            .filter(|e| e.code == ErrorCode::ShortVoiceProfile)
            .count();
        assert_eq!(short, 2);
    }

    #[test]
    fn test_negative_step_accents() {
        let mut registry = base_registry();
        registry.default_melody_pattern[0].accent = -0.2;
        registry.variations[0].preset_lines = Some(vec![
            vec![StepTemplate::offset(0, NoteLength::Eighth, 1.0)],
            vec![
                StepTemplate::offset(0, NoteLength::Eighth, 1.0),
                StepTemplate::offset(-1, NoteLength::Eighth, -1.0),
            ],
        ]);
        registry.variations[0].melody_patterns[0][0].accent = f64::NAN;
        let result = validate_registry(&registry, &DiatonicCatalog::major());
        let paths: Vec<_> = result
            .errors
            .iter()
            .filter(|e| e.code == ErrorCode::NegativeStepAccent)
            .filter_map(|e| e.path.as_deref())
            .collect();
        assert_eq!(
            paths,
            vec![
                "default_melody_pattern[0].accent",
                "variations[0].preset_lines[1][1].accent",
                "variations[0].melody_patterns[0][0].accent",
            ]
        );
    }

    #[test]
    fn test_warnings_do_not_fail_validation() {
        let mut registry = base_registry();
        registry.variations[0].preset_lines = Some(vec![Vec::new()]);
        registry.variations[0].melody_patterns.clear();
        let result = validate_registry(&registry, &DiatonicCatalog::major());
        assert!(result.is_ok());
        assert!(result.has_warning(WarningCode::PresetCountMismatch));
        assert!(result.has_warning(WarningCode::MissingFallbackPattern));
    }
}

//! Variation, contour and motif selection.
//!
//! Registry lookups return `Option`; the fallback policy for each of them
//! lives here.

use log::{debug, trace};
use rand::Rng;

use canonic_spec::{
    Degree, Motif, MotifGroup, MotifGroups, Registry, Variation, FALLBACK_MOTIF_ID,
};

use crate::rng::choose;

/// Variation for a caller preference.
///
/// A registered name wins; anything else (unset, unknown) means no
/// preference and draws uniformly. `None` only for an empty registry.
pub fn pick_variation<'a, R: Rng + ?Sized>(
    registry: &'a Registry,
    name: Option<&str>,
    rng: &mut R,
) -> Option<&'a Variation> {
    if let Some(variation) = name.and_then(|n| registry.variation(n)) {
        return Some(variation);
    }
    if let Some(n) = name {
        debug!("unknown variation '{}', picking one at random", n);
    }
    choose(rng, &registry.variations)
}

/// Variation for a melody request; unknown names resolve to the first registered one.
pub fn lookup_or_first<'a>(registry: &'a Registry, name: &str) -> Option<&'a Variation> {
    registry.variation(name).or_else(|| {
        debug!("unknown variation '{}', using the first registered one", name);
        registry.first_variation()
    })
}

/// Uniform choice among the variation's contours, or the registry defaults.
pub fn pick_anchor_trend<R: Rng + ?Sized>(
    registry: &Registry,
    variation: &Variation,
    rng: &mut R,
) -> Vec<i32> {
    let candidates = if variation.anchor_trends.is_empty() {
        &registry.default_anchor_trends
    } else {
        &variation.anchor_trends
    };
    choose(rng, candidates).cloned().unwrap_or_default()
}

/// Anchor offset at a position: the trend value, else its last value, else 0.
pub fn trend_value(trend: &[i32], index: usize) -> i32 {
    trend
        .get(index)
        .or_else(|| trend.last())
        .copied()
        .unwrap_or(0)
}

/// Motif group for a degree at a position.
///
/// Position beats harmony: the first entry opens and the last one cadences.
pub fn motif_group_for(degree: Degree, index: usize, total: usize) -> MotifGroup {
    if index == 0 {
        return MotifGroup::Opening;
    }
    if index + 1 == total {
        return MotifGroup::Cadence;
    }
    match degree {
        Degree::TONIC => MotifGroup::Tonic,
        Degree::DOMINANT => MotifGroup::Dominant,
        Degree::RELATIVE => MotifGroup::Relative,
        Degree::PREDOMINANT => MotifGroup::Predominant,
        Degree::MEDIANT => MotifGroup::Mediant,
        _ => MotifGroup::Default,
    }
}

/// Candidate motif ids for a group.
///
/// Reads the variation's map (or the registry default map), then that map's
/// `default` group, then the fallback motif alone.
pub fn motif_candidates(
    registry: &Registry,
    variation: &Variation,
    group: MotifGroup,
) -> Vec<String> {
    let map: &MotifGroups = variation
        .motif_groups
        .as_ref()
        .unwrap_or(&registry.default_motif_groups);
    map.get(&group)
        .filter(|ids| !ids.is_empty())
        .or_else(|| map.get(&MotifGroup::Default).filter(|ids| !ids.is_empty()))
        .cloned()
        .unwrap_or_else(|| {
            debug!("no motifs for group '{}', using '{}'", group, FALLBACK_MOTIF_ID);
            vec![FALLBACK_MOTIF_ID.to_string()]
        })
}

/// Uniform choice that avoids repeating `last` whenever another option exists.
pub fn pick_motif_id<'a, R: Rng + ?Sized>(
    options: &'a [String],
    last: Option<&str>,
    rng: &mut R,
) -> &'a str {
    let filtered: Vec<&'a String> = options
        .iter()
        .filter(|id| Some(id.as_str()) != last)
        .collect();
    let pool: Vec<&'a String> = if filtered.is_empty() {
        options.iter().collect()
    } else {
        filtered
    };
    let picked = choose(rng, &pool)
        .copied()
        .map(String::as_str)
        .unwrap_or(FALLBACK_MOTIF_ID);
    trace!("motif '{}' from {:?} (last {:?})", picked, options, last);
    picked
}

/// Motif for an id, the fallback motif when unknown; `None` only when both are missing.
pub fn resolve_motif<'a>(registry: &'a Registry, id: &str) -> Option<&'a Motif> {
    registry.motifs.get(id).or_else(|| {
        debug!("unknown motif '{}', using '{}'", id, FALLBACK_MOTIF_ID);
        registry.motifs.get(FALLBACK_MOTIF_ID)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::builtin_registry;
    use crate::rng::rng_for;
    use canonic_spec::motif_groups;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_pick_variation_prefers_known_name() {
        let registry = builtin_registry();
        let mut rng = rng_for(1, "test", "");
        for _ in 0..10 {
            let picked = pick_variation(&registry, Some("lofi-rise"), &mut rng).unwrap();
            assert_eq!(picked.name, "lofi-rise");
        }
    }

    #[test]
    fn test_pick_variation_unknown_name_is_random() {
        let registry = builtin_registry();
        let mut rng = StepRng::new(0, 0);
        let picked = pick_variation(&registry, Some("nope"), &mut rng).unwrap();
        assert!(registry.variation(&picked.name).is_some());
    }

    #[test]
    fn test_lookup_or_first() {
        let registry = builtin_registry();
        assert_eq!(lookup_or_first(&registry, "lofi-passing").unwrap().name, "lofi-passing");
        assert_eq!(lookup_or_first(&registry, "missing").unwrap().name, "classic");
    }

    #[test]
    fn test_anchor_trend_falls_back_to_defaults() {
        let registry = builtin_registry();
        let bare = Variation::new("bare", vec![Degree::TONIC]);
        let mut rng = rng_for(3, "test", "");
        let trend = pick_anchor_trend(&registry, &bare, &mut rng);
        assert!(registry.default_anchor_trends.contains(&trend));
    }

    #[test]
    fn test_trend_value_repeats_last() {
        assert_eq!(trend_value(&[0, 1, 2], 1), 1);
        assert_eq!(trend_value(&[0, 1, 2], 7), 2);
        assert_eq!(trend_value(&[], 3), 0);
    }

    #[test]
    fn test_motif_group_for_positions_and_degrees() {
        assert_eq!(motif_group_for(Degree::DOMINANT, 0, 8), MotifGroup::Opening);
        assert_eq!(motif_group_for(Degree::TONIC, 7, 8), MotifGroup::Cadence);
        assert_eq!(motif_group_for(Degree::TONIC, 3, 8), MotifGroup::Tonic);
        assert_eq!(motif_group_for(Degree::DOMINANT, 3, 8), MotifGroup::Dominant);
        assert_eq!(motif_group_for(Degree::RELATIVE, 3, 8), MotifGroup::Relative);
        assert_eq!(motif_group_for(Degree::PREDOMINANT, 3, 8), MotifGroup::Predominant);
        assert_eq!(motif_group_for(Degree::MEDIANT, 3, 8), MotifGroup::Mediant);
        assert_eq!(motif_group_for(Degree::SUPERTONIC, 3, 8), MotifGroup::Default);
        assert_eq!(motif_group_for(Degree::LEADING, 3, 8), MotifGroup::Default);
    }

    #[test]
    fn test_motif_candidates_fallback_chain() {
        let registry = builtin_registry();
        let mut variation = Variation::new("v", vec![Degree::TONIC]);
        variation.motif_groups = Some(motif_groups(&[(MotifGroup::Default, &["ripple"])]));
        assert_eq!(
            motif_candidates(&registry, &variation, MotifGroup::Mediant),
            vec!["ripple".to_string()]
        );

        variation.motif_groups = Some(MotifGroups::new());
        assert_eq!(
            motif_candidates(&registry, &variation, MotifGroup::Mediant),
            vec![FALLBACK_MOTIF_ID.to_string()]
        );

        variation.motif_groups = None;
        assert_eq!(
            motif_candidates(&registry, &variation, MotifGroup::Mediant),
            vec!["ripple".to_string(), "turn".to_string()]
        );
    }

    #[test]
    fn test_pick_motif_id_avoids_last() {
        let options = vec!["descent".to_string(), "turn".to_string()];
        let mut rng = StepRng::new(0, 0);
        assert_eq!(pick_motif_id(&options, Some("descent"), &mut rng), "turn");
        assert_eq!(pick_motif_id(&options, Some("turn"), &mut rng), "descent");
    }

    #[test]
    fn test_pick_motif_id_single_and_empty() {
        let mut rng = StepRng::new(0, 0);
        let single = vec!["sustain".to_string()];
        assert_eq!(pick_motif_id(&single, Some("sustain"), &mut rng), "sustain");
        assert_eq!(pick_motif_id(&[], None, &mut rng), FALLBACK_MOTIF_ID);
    }

    #[test]
    fn test_resolve_motif_falls_back() {
        let registry = builtin_registry();
        let motif = resolve_motif(&registry, "unheard").unwrap();
        assert_eq!(Some(motif), registry.motifs.get(FALLBACK_MOTIF_ID));
    }
}

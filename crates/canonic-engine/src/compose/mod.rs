//! Melody composition.
//!
//! A melody is produced by the first path that yields steps:
//!
//! 1. preset lines, when the variation has exactly one per degree;
//! 2. generative motif expansion along the anchor trend;
//! 3. the variation's static fallback pattern (or the registry default).
//!
//! Every emitted `scale_index` lies in `[0, scale_length - 1]`.

use log::debug;
use rand::Rng;

use canonic_spec::{MelodyParams, MelodyStep, Registry};

mod error;
mod fallback;
mod generative;
mod preset;
mod utils;


pub use error::GenerateError;
pub use generative::{
    render_position, Position, CADENCE_TAIL_ACCENT, CADENCE_TAIL_PROBABILITY, HELD_NOTE_ACCENT,
    SKIP_MIN_STEPS, SKIP_PROBABILITY,
};

use crate::select::{lookup_or_first, pick_anchor_trend};

/// Renders the melody for a generated state.
///
/// Unknown variation names resolve to the first registered variation and an
/// empty anchor trend is sampled from the variation's candidates.
pub fn create_canon_melody_pattern<R: Rng + ?Sized>(
    registry: &Registry,
    params: &MelodyParams,
    rng: &mut R,
) -> Result<Vec<MelodyStep>, GenerateError> {
    if params.scale_length == 0 {
        return Err(GenerateError::EmptyScale);
    }
    let variation =
        lookup_or_first(registry, &params.variation_name).ok_or(GenerateError::NoVariations)?;

    let sampled;
    let trend: &[i32] = if params.anchor_trend.is_empty() {
        sampled = pick_anchor_trend(registry, variation, rng);
        &sampled
    } else {
        &params.anchor_trend
    };

    if let Some(steps) = preset::render_presets(
        variation,
        &params.degrees,
        trend,
        params.base_scale_index,
        params.scale_length,
    ) {
        return Ok(steps);
    }

    let line = generative::generate_line(
        registry,
        variation,
        &params.degrees,
        trend,
        params.base_scale_index,
        params.scale_length,
        rng,
    );
    if !line.is_empty() {
        return Ok(line);
    }

    debug!("variation '{}': nothing generated, using the fallback pattern", variation.name);
    Ok(fallback::render_fallback(
        registry,
        variation,
        params.base_scale_index,
        params.scale_length,
    ))
}

//! Generative path: motifs expanded along the anchor trend.

use log::trace;
use rand::Rng;

use canonic_spec::{Degree, MelodyStep, Motif, NoteLength, Registry, Variation};

use super::utils::{anchor_index, clamp_index};
use crate::rng::chance;
use crate::select::{motif_candidates, motif_group_for, pick_motif_id, resolve_motif, trend_value};

/// Chance of dropping a step from a motif longer than [`SKIP_MIN_STEPS`].
pub const SKIP_PROBABILITY: f64 = 0.08;
/// Motifs with this many steps or fewer never drop steps.
pub const SKIP_MIN_STEPS: usize = 2;
/// Accent of the single note emitted when every motif step was dropped.
pub const HELD_NOTE_ACCENT: f64 = 0.82;
/// Chance of a closing step one below the last anchor.
pub const CADENCE_TAIL_PROBABILITY: f64 = 0.45;
/// Accent of the closing half note.
pub const CADENCE_TAIL_ACCENT: f64 = 0.85;

/// Everything one degree position contributes to the line, minus randomness.
#[derive(Debug, Clone, Copy)]
pub struct Position<'a> {
    pub index: usize,
    pub total: usize,
    pub degree: Degree,
    /// `None` when neither the chosen motif nor the fallback motif exists.
    pub motif: Option<&'a Motif>,
    pub anchor: i64,
    pub scale_length: usize,
}

impl Position<'_> {
    fn is_last(&self) -> bool {
        self.index + 1 == self.total
    }
}

/// Renders the steps of one degree position.
///
/// The batch depends only on the position and the draws taken from `rng`.
pub fn render_position<R: Rng + ?Sized>(position: &Position<'_>, rng: &mut R) -> Vec<MelodyStep> {
    let mut batch = Vec::new();

    if let Some(motif) = position.motif {
        let can_skip = motif.steps.len() > SKIP_MIN_STEPS;
        for (i, &step) in motif.steps.iter().enumerate() {
            if can_skip && chance(rng, SKIP_PROBABILITY) {
                continue;
            }
            let jitter = if chance(rng, motif.jitter()) {
                if chance(rng, 0.5) {
                    -1
                } else {
                    1
                }
            } else {
                0
            };
            let index = clamp_index(
                position.anchor.saturating_add(i64::from(step) + jitter),
                position.scale_length,
            );
            let duration = motif.duration_at(i).unwrap_or(NoteLength::Eighth);
            batch.push(MelodyStep::new(index, duration, motif.accent_at(i)));
        }
    }

    if batch.is_empty() {
        batch.push(MelodyStep::new(
            clamp_index(position.anchor, position.scale_length),
            NoteLength::Whole,
            HELD_NOTE_ACCENT,
        ));
    }

    if position.is_last() && chance(rng, CADENCE_TAIL_PROBABILITY) {
        batch.push(MelodyStep::new(
            clamp_index(position.anchor - 1, position.scale_length),
            NoteLength::Half,
            CADENCE_TAIL_ACCENT,
        ));
    }

    batch
}

/// Expands one motif per degree and concatenates the batches.
pub(crate) fn generate_line<R: Rng + ?Sized>(
    registry: &Registry,
    variation: &Variation,
    degrees: &[Degree],
    trend: &[i32],
    base_scale_index: i32,
    scale_length: usize,
    rng: &mut R,
) -> Vec<MelodyStep> {
    let total = degrees.len();
    let mut last_motif: Option<String> = None;
    let mut line = Vec::new();

    for (index, &degree) in degrees.iter().enumerate() {
        let anchor = anchor_index(base_scale_index, trend_value(trend, index), scale_length);
        let group = motif_group_for(degree, index, total);
        let candidates = motif_candidates(registry, variation, group);
        let motif_id = pick_motif_id(&candidates, last_motif.as_deref(), rng).to_string();
        trace!(
            "position {} degree {} group {} motif '{}' anchor {}",
            index,
            degree,
            group,
            motif_id,
            anchor
        );

        let position = Position {
            index,
            total,
            degree,
            motif: resolve_motif(registry, &motif_id),
            anchor,
            scale_length,
        };
        line.extend(render_position(&position, rng));
        last_motif = Some(motif_id);
    }

    line
}

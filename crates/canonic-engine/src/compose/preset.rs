//! Preset path: hand-authored lines rendered along the anchor trend.

use log::debug;

use canonic_spec::{Degree, MelodyStep, StepTemplate, Variation};

use super::utils::{anchor_index, clamp_index};
use crate::select::trend_value;

/// Renders the variation's preset lines when there is exactly one per degree.
///
/// Returns `None` when presets do not apply or render to nothing, so the
/// caller moves on to the generative path.
pub(crate) fn render_presets(
    variation: &Variation,
    degrees: &[Degree],
    trend: &[i32],
    base_scale_index: i32,
    scale_length: usize,
) -> Option<Vec<MelodyStep>> {
    let Some(lines) = variation.preset_lines_for(degrees.len()) else {
        if variation.preset_lines.is_some() {
            debug!(
                "variation '{}': preset count does not match {} degrees, generating",
                variation.name,
                degrees.len()
            );
        }
        return None;
    };

    let steps: Vec<MelodyStep> = lines
        .iter()
        .enumerate()
        .flat_map(|(position, line)| {
            let anchor = anchor_index(base_scale_index, trend_value(trend, position), scale_length);
            line.iter()
                .map(move |template| render_template(template, anchor, scale_length))
        })
        .collect();

    (!steps.is_empty()).then_some(steps)
}

/// One authored step at an anchor, clamped into the scale.
pub(crate) fn render_template(
    template: &StepTemplate,
    anchor: i64,
    scale_length: usize,
) -> MelodyStep {
    MelodyStep::new(
        clamp_index(template.raw_index(anchor), scale_length),
        template.duration,
        template.accent,
    )
}

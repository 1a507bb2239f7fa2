//! Static fallback melody, used when both other paths yield nothing.

use log::debug;

use canonic_spec::{MelodyStep, Registry, Variation};

use super::preset::render_template;

/// Renders the variation's first fallback pattern (or the registry default)
/// relative to the base scale index.
pub(crate) fn render_fallback(
    registry: &Registry,
    variation: &Variation,
    base_scale_index: i32,
    scale_length: usize,
) -> Vec<MelodyStep> {
    let pattern = match variation.melody_patterns.first() {
        Some(pattern) => pattern,
        None => {
            debug!(
                "variation '{}' has no fallback pattern, using the registry default",
                variation.name
            );
            &registry.default_melody_pattern
        }
    };
    pattern
        .iter()
        .map(|template| render_template(template, i64::from(base_scale_index), scale_length))
        .collect()
}

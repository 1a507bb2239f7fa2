//! Built-in registry tables: motifs, variations, preset lines and fallback patterns.

pub mod motifs;
pub mod presets;
pub mod variations;

use canonic_spec::Registry;

pub use motifs::{builtin_motifs, default_motif_groups};
pub use variations::{builtin_variations, default_anchor_trends};

/// The registry the engine ships with.
pub fn builtin_registry() -> Registry {
    Registry {
        motifs: builtin_motifs(),
        variations: builtin_variations(),
        default_motif_groups: default_motif_groups(),
        default_anchor_trends: default_anchor_trends(),
        default_melody_pattern: presets::descending_pattern(),
    }
}

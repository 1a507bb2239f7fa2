//! Built-in motif library and default group map.

use canonic_spec::note::NoteLength::{Eighth as E, Quarter as Q, Sixteenth as S, Whole as W};
use canonic_spec::{motif_groups, Motif, MotifGroup, MotifGroups, MotifLibrary};

/// The nine built-in motifs.
pub fn builtin_motifs() -> MotifLibrary {
    let mut library = MotifLibrary::new();
    library.insert(
        "descent",
        Motif::new(&[0, -1, -2, -3], &[E, E, E, E], &[1.0, 0.92, 0.9, 0.95], 0.12),
    );
    library.insert(
        "wideDescent",
        Motif::new(&[0, -2, -3, -5], &[E, E, E, E], &[1.0, 0.9, 0.88, 0.94], 0.1),
    );
    library.insert(
        "turn",
        Motif::new(
            &[0, -1, 1, 0, -2, -1],
            &[E, S, S, E, E, E],
            &[1.0, 0.84, 0.8, 0.9, 0.92, 0.88],
            0.2,
        ),
    );
    library.insert(
        "lift",
        Motif::new(
            &[0, 2, 1, 0, -1],
            &[E, E, E, E, Q],
            &[1.0, 0.92, 0.9, 0.95, 0.88],
            0.18,
        ),
    );
    library.insert(
        "ripple",
        Motif::new(&[0, -2, 0, -1], &[E, E, Q, E], &[1.0, 0.85, 0.9, 0.88], 0.22),
    );
    library.insert(
        "cadenceFall",
        Motif::new(&[0, -1, -3, -4], &[E, E, E, Q], &[1.0, 0.93, 0.9, 0.96], 0.1),
    );
    library.insert(
        "cadenceLift",
        Motif::new(&[-2, 0, 1, 0], &[E, E, E, Q], &[0.92, 1.0, 0.95, 0.9], 0.14),
    );
    library.insert(
        "arpeggio",
        Motif::new(&[0, -3, -1, -4], &[E, E, E, E], &[1.0, 0.88, 0.92, 0.9], 0.16),
    );
    library.insert("sustain", Motif::new(&[0], &[W], &[0.88], 0.0));
    library
}

/// Group map for variations that do not bring their own.
pub fn default_motif_groups() -> MotifGroups {
    motif_groups(&[
        (MotifGroup::Opening, &["descent", "arpeggio"]),
        (MotifGroup::Tonic, &["descent", "turn"]),
        (MotifGroup::Dominant, &["turn", "lift", "cadenceLift"]),
        (MotifGroup::Relative, &["ripple", "descent"]),
        (MotifGroup::Predominant, &["wideDescent", "arpeggio"]),
        (MotifGroup::Mediant, &["ripple", "turn"]),
        (MotifGroup::Cadence, &["cadenceFall", "cadenceLift", "sustain"]),
        (MotifGroup::Default, &["descent", "turn", "arpeggio"]),
    ])
}

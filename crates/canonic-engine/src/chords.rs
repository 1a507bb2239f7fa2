//! Chord pattern builder.

use canonic_spec::{Chord, ChordCatalog, ChordOrigin, ConfigError, Degree};

/// Instantiates one owned chord per degree, in pattern order.
///
/// Each chord gets its own copy of the template's interval and successor
/// lists. A degree the catalog does not cover is a configuration error.
pub fn build_chords(
    catalog: &dyn ChordCatalog,
    pattern: &[Degree],
) -> Result<Vec<Chord>, ConfigError> {
    pattern
        .iter()
        .map(|&degree| {
            catalog
                .template_for(degree)
                .map(|template| Chord::from_template(degree, template, ChordOrigin::Canon))
                .ok_or(ConfigError::DegreeOutOfRange {
                    degree: degree.get(),
                    len: catalog.len(),
                })
        })
        .collect()
}

//! Chord instances and the read-only chord catalog capability.
//!
//! The catalog belongs to another subsystem; the canon generator only ever
//! reads two lists from an entry (intervals and successor degrees) and copies
//! them into chords it owns.

use serde::{Deserialize, Serialize};

use crate::degree::Degree;

/// Read-only view of one catalog entry.
pub trait ChordTemplate {
    /// Semitone intervals above the chord root.
    fn intervals(&self) -> &[i32];
    /// Degrees that may follow this chord.
    fn next_degrees(&self) -> &[u8];
}

/// Read-only chord catalog indexed by zero-based position (degree - 1).
pub trait ChordCatalog: Send + Sync {
    /// Number of templates in the catalog.
    fn len(&self) -> usize;

    /// Template at a zero-based index.
    fn template(&self, index: usize) -> Option<&dyn ChordTemplate>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Template for a degree, `None` when the catalog is shorter than the degree.
    fn template_for(&self, degree: Degree) -> Option<&dyn ChordTemplate> {
        self.template(degree.index())
    }
}

/// Which subsystem created a chord.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChordOrigin {
    /// Built by the canon generator.
    #[default]
    Canon,
    /// Built by a free-running progression generator.
    Progression,
}

/// An owned chord instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Chord {
    /// Degree this chord was instantiated for.
    pub degree: Degree,
    /// Semitone intervals above the root (owned copy).
    pub intervals: Vec<i32>,
    /// Successor degrees (owned copy).
    pub next_degrees: Vec<u8>,
    /// Originating subsystem.
    pub origin: ChordOrigin,
}

impl Chord {
    /// Copies a template's lists into a new chord.
    pub fn from_template(degree: Degree, template: &dyn ChordTemplate, origin: ChordOrigin) -> Self {
        Self {
            degree,
            intervals: template.intervals().to_vec(),
            next_degrees: template.next_degrees().to_vec(),
            origin,
        }
    }

    /// True when the chord was built by the canon generator.
    pub fn is_canon(&self) -> bool {
        self.origin == ChordOrigin::Canon
    }
}

/// A catalog entry stored by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub intervals: Vec<i32>,
    pub next_degrees: Vec<u8>,
}

impl CatalogEntry {
    pub fn new(intervals: &[i32], next_degrees: &[u8]) -> Self {
        Self {
            intervals: intervals.to_vec(),
            next_degrees: next_degrees.to_vec(),
        }
    }
}

impl ChordTemplate for CatalogEntry {
    fn intervals(&self) -> &[i32] {
        &self.intervals
    }

    fn next_degrees(&self) -> &[u8] {
        &self.next_degrees
    }
}

/// Diatonic triads of a major key, one entry per degree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiatonicCatalog {
    entries: Vec<CatalogEntry>,
}

impl DiatonicCatalog {
    /// The seven diatonic triads with common functional successors.
    pub fn major() -> Self {
        Self {
            entries: vec![
                CatalogEntry::new(&[0, 4, 7], &[4, 5, 6, 2, 3]),
                CatalogEntry::new(&[0, 3, 7], &[5, 7]),
                CatalogEntry::new(&[0, 3, 7], &[6, 4]),
                CatalogEntry::new(&[0, 4, 7], &[5, 1, 2]),
                CatalogEntry::new(&[0, 4, 7], &[1, 6]),
                CatalogEntry::new(&[0, 3, 7], &[2, 4]),
                CatalogEntry::new(&[0, 3, 6], &[1, 3]),
            ],
        }
    }

    /// A catalog over arbitrary entries.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

impl Default for DiatonicCatalog {
    fn default() -> Self {
        Self::major()
    }
}

impl ChordCatalog for DiatonicCatalog {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn template(&self, index: usize) -> Option<&dyn ChordTemplate> {
        self.entries.get(index).map(|e| e as &dyn ChordTemplate)
    }
}

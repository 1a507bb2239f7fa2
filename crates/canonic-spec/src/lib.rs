//! Canonic Spec Library
//!
//! Types, catalog capability and validation for the canon generator.
//!
//! # Overview
//!
//! A canon is described by a [`Registry`]: a motif library, a list of named
//! [`Variation`]s (degree progression, voice overrides, contour candidates,
//! motif-group maps, preset lines) and the defaults used when a variation
//! leaves something out. The generator in `canonic-engine` reads a registry
//! and a [`ChordCatalog`] and produces a [`CanonState`] plus a list of
//! [`MelodyStep`]s.
//!
//! # Example
//!
//! ```
//! use canonic_spec::{validate_registry, DiatonicCatalog, Registry};
//!
//! let json = r#"{
//!     "motifs": { "descent": { "steps": [0, -1], "durations": ["8n"] } },
//!     "variations": [ { "name": "mini", "pattern": [1, 4, 5, 1] } ],
//!     "default_motif_groups": { "default": ["descent"] },
//!     "default_anchor_trends": [[0, 1, 2, 1]],
//!     "default_melody_pattern": [ { "offset": 0, "duration": "4n" } ]
//! }"#;
//!
//! let registry = Registry::from_json(json).unwrap();
//! let result = validate_registry(&registry, &DiatonicCatalog::major());
//! assert!(result.is_ok());
//! ```
//!
//! # Modules
//!
//! - [`chord`]: Owned chords and the read-only catalog capability
//! - [`degree`]: Scale degrees 1..=7
//! - [`error`]: Validation codes and configuration errors
//! - [`melody`]: Rendered steps and authored step templates
//! - [`motif`]: Motifs, motif groups, motif library
//! - [`note`]: Duration tokens
//! - [`registry`]: The registry container
//! - [`state`]: Generator requests and the assembled state
//! - [`validation`]: Registry validation
//! - [`variation`]: Named canon configurations
//! - [`voice`]: Voice settings and overrides

pub mod chord;
pub mod degree;
pub mod error;
pub mod melody;
pub mod motif;
pub mod note;
pub mod registry;
pub mod state;
pub mod validation;
pub mod variation;
pub mod voice;

// Re-export commonly used types at the crate root
pub use chord::{CatalogEntry, Chord, ChordCatalog, ChordOrigin, ChordTemplate, DiatonicCatalog};
pub use degree::{degrees, Degree, InvalidDegree};
pub use error::{
    ConfigError, EngineError, ErrorCode, SpecError, ValidationError, ValidationResult,
    ValidationWarning, WarningCode,
};
pub use melody::{MelodyStep, StepTarget, StepTemplate};
pub use motif::{
    motif_groups, Motif, MotifGroup, MotifGroups, MotifLibrary, ACCENT_DECAY, DEFAULT_JITTER,
    FALLBACK_MOTIF_ID,
};
pub use note::{NoteLength, ParseNoteLengthError};
pub use registry::Registry;
pub use state::{CanonState, MelodyParams, StateOptions};
pub use validation::validate_registry;
pub use variation::{OffsetRange, Variation, DEFAULT_OFFSET_RANGE};
pub use voice::{clamp_voices, VoiceSettings, VoiceSettingsOverride, MAX_VOICES, MIN_VOICES};

//! Canonic Engine - Procedural Canon Generation
//!
//! This crate turns a [`Registry`](canonic_spec::Registry) and a chord catalog
//! into canon material: a degree progression with owned chords, per-voice
//! settings and a melodic line of scale-index steps.
//!
//! # Randomness
//!
//! Nothing in the engine touches a global random source. Every operation that
//! draws takes `&mut R where R: rand::Rng`. For reproducible output derive one
//! PCG32 stream per purpose with [`rng_for`] (seeded via BLAKE3); for fresh
//! output use [`entropy_rng`].
//!
//! # Example
//!
//! ```
//! use canonic_engine::{rng_for, CanonEngine};
//! use canonic_spec::StateOptions;
//!
//! let engine = CanonEngine::builtin();
//! let options = StateOptions::variation("classic").with_voices(2);
//! let state = engine
//!     .generate_state(&options, &mut rng_for(42, "state", ""))
//!     .unwrap();
//! assert_eq!(state.voice_settings.voices, 2);
//!
//! let params = state.melody_params(15);
//! let melody = engine.melody(&params, &mut rng_for(42, "melody", "")).unwrap();
//! assert!(melody.iter().all(|step| step.scale_index < 15));
//! ```
//!
//! # Module Structure
//!
//! - [`library`]: Built-in motifs, variations, preset lines
//! - [`select`]: Variation, contour and motif selection
//! - [`chords`]: Chord pattern builder
//! - [`voices`]: Voice settings resolver
//! - [`compose`]: Melody composer
//! - [`state`]: State assembler
//! - [`engine`]: Validated registry + catalog binding
//! - [`rng`]: Seeded random streams

pub mod chords;
pub mod compose;
pub mod engine;
pub mod library;
pub mod rng;
pub mod select;
pub mod state;
pub mod voices;

// Re-export main types
pub use chords::build_chords;
pub use compose::{create_canon_melody_pattern, GenerateError};
pub use engine::CanonEngine;
pub use library::builtin_registry;
pub use rng::{entropy_rng, rng_for};
pub use select::{motif_group_for, pick_anchor_trend, pick_motif_id, pick_variation};
pub use state::generate_canon_state;
pub use voices::resolve_voice_settings;

/// Crate version for engine identification.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine identifier used in machine-readable output.
pub const ENGINE_ID: &str = "canonic-engine";

//! Registry loading and random-source setup shared by the commands.

use std::path::Path;

use anyhow::{Context, Result};
use rand_pcg::Pcg32;

use canonic_engine::{builtin_registry, entropy_rng, rng_for, CanonEngine};
use canonic_spec::{DiatonicCatalog, Registry};

/// Reads a registry file, or returns the built-in registry when no path is given.
pub fn load_registry(path: Option<&str>) -> Result<Registry> {
    match path {
        Some(path) => Registry::from_path(Path::new(path))
            .with_context(|| format!("Failed to load registry file: {}", path)),
        None => Ok(builtin_registry()),
    }
}

/// A validated engine over the major diatonic catalog.
pub fn load_engine(path: Option<&str>) -> Result<CanonEngine> {
    match path {
        Some(_) => {
            let registry = load_registry(path)?;
            CanonEngine::new(registry, DiatonicCatalog::major())
                .context("Registry failed validation (run `canonic validate` for details)")
        }
        None => Ok(CanonEngine::builtin()),
    }
}

/// Random streams for state and melody generation.
pub struct RngPair {
    pub state: Pcg32,
    pub melody: Pcg32,
}

impl RngPair {
    /// Seeded streams when a seed is given, entropy otherwise.
    pub fn new(seed: Option<u32>) -> Self {
        match seed {
            Some(seed) => Self {
                state: rng_for(seed, "state", ""),
                melody: rng_for(seed, "melody", ""),
            },
            None => Self {
                state: entropy_rng(),
                melody: entropy_rng(),
            },
        }
    }
}

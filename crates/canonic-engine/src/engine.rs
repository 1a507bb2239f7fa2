//! A validated registry bound to a chord catalog.

use log::warn;
use rand::Rng;

use canonic_spec::{
    validate_registry, CanonState, ChordCatalog, ConfigError, DiatonicCatalog, MelodyParams,
    MelodyStep, Registry, StateOptions, ValidationResult,
};

use crate::compose::{create_canon_melody_pattern, GenerateError};
use crate::library::builtin_registry;
use crate::state::generate_canon_state;

/// Immutable generator configuration; share it across threads freely.
pub struct CanonEngine {
    registry: Registry,
    catalog: Box<dyn ChordCatalog>,
}

impl CanonEngine {
    /// Binds a registry to a catalog.
    ///
    /// Validation errors refuse the registry; warnings are logged.
    pub fn new(
        registry: Registry,
        catalog: impl ChordCatalog + 'static,
    ) -> Result<Self, ConfigError> {
        let result = validate_registry(&registry, &catalog);
        for warning in &result.warnings {
            warn!("{}", warning);
        }
        if let Some(first) = result.errors.first() {
            return Err(ConfigError::InvalidRegistry {
                errors: result.errors.len(),
                first: first.to_string(),
            });
        }
        Ok(Self {
            registry,
            catalog: Box::new(catalog),
        })
    }

    /// The built-in registry over the major diatonic catalog.
    pub fn builtin() -> Self {
        Self {
            registry: builtin_registry(),
            catalog: Box::new(DiatonicCatalog::major()),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn catalog(&self) -> &dyn ChordCatalog {
        &*self.catalog
    }

    /// Re-runs registry validation, e.g. to report warnings.
    pub fn validate(&self) -> ValidationResult {
        validate_registry(&self.registry, self.catalog())
    }

    pub fn generate_state<R: Rng + ?Sized>(
        &self,
        options: &StateOptions,
        rng: &mut R,
    ) -> Result<CanonState, GenerateError> {
        generate_canon_state(&self.registry, self.catalog(), options, rng)
    }

    pub fn melody<R: Rng + ?Sized>(
        &self,
        params: &MelodyParams,
        rng: &mut R,
    ) -> Result<Vec<MelodyStep>, GenerateError> {
        create_canon_melody_pattern(&self.registry, params, rng)
    }
}

impl Default for CanonEngine {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canonic_spec::{EngineError, NoteLength, StepTemplate, Variation};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_engine_is_shareable() {
        assert_send_sync::<CanonEngine>();
    }

    #[test]
    fn test_builtin_registry_accepted() {
        let engine = CanonEngine::new(builtin_registry(), DiatonicCatalog::major()).unwrap();
        assert_eq!(engine.registry().variations.len(), 3);
        assert_eq!(engine.catalog().len(), 7);
    }

    #[test]
    fn test_invalid_registry_refused() {
        let mut registry = builtin_registry();
        registry.variations.push(Variation::new("classic", Vec::new()));
        let err = CanonEngine::new(registry, DiatonicCatalog::major())
            .err()
            .unwrap();
        assert_eq!(err.code(), "CANON_CONFIG_002");
        match err {
            ConfigError::InvalidRegistry { errors, first } => {
                assert_eq!(errors, 2);
                assert!(first.starts_with("E002"), "{}", first);
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_negative_preset_accent_refused() {
        let mut registry = builtin_registry();
        let lines = registry.variations[0].preset_lines.as_mut().unwrap();
        lines[0][0] = StepTemplate::offset(0, NoteLength::Eighth, -1.0);
        match CanonEngine::new(registry, DiatonicCatalog::major()) {
            Err(ConfigError::InvalidRegistry { first, .. }) => {
                assert!(first.starts_with("E010"), "{}", first);
            }
            Err(other) => panic!("unexpected error {:?}", other),
            Ok(_) => panic!("negative accent accepted"),
        }
    }

    #[test]
    fn test_warnings_do_not_refuse() {
        let mut registry = builtin_registry();
        registry.variations[0].preset_lines = Some(Vec::new());
        let engine = CanonEngine::new(registry, DiatonicCatalog::major()).unwrap();
        assert!(!engine.validate().warnings.is_empty());
    }
}

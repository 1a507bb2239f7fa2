//! Error types for melody composition and state assembly.

use thiserror::Error;

use canonic_spec::{ConfigError, EngineError};

/// Errors that can occur while generating a state or a melody.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("scale length must be at least 1")]
    EmptyScale,
    #[error("registry has no variations")]
    NoVariations,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl EngineError for GenerateError {
    fn code(&self) -> &'static str {
        match self {
            GenerateError::EmptyScale => "CANON_COMPOSE_001",
            GenerateError::NoVariations => "CANON_COMPOSE_002",
            GenerateError::Config(inner) => inner.code(),
        }
    }

    fn category(&self) -> &'static str {
        match self {
            GenerateError::Config(_) => "config",
            _ => "compose",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_categories() {
        assert_eq!(GenerateError::EmptyScale.code(), "CANON_COMPOSE_001");
        assert_eq!(GenerateError::EmptyScale.category(), "compose");

        let wrapped: GenerateError = ConfigError::DegreeOutOfRange { degree: 7, len: 3 }.into();
        assert_eq!(wrapped.code(), "CANON_CONFIG_001");
        assert_eq!(wrapped.category(), "config");
        assert_eq!(
            wrapped.to_string(),
            "degree 7 has no chord template (catalog holds 3 entries)"
        );
    }
}

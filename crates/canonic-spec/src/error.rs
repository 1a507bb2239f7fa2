//! Error types for registry validation and configuration integrity.

use thiserror::Error;

/// Error codes for registry validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Registry declares no variations
    EmptyRegistry,
    /// E002: Two variations share a name
    DuplicateVariation,
    /// E003: Variation has an empty degree pattern
    EmptyPattern,
    /// E004: Degree has no template in the chord catalog
    DegreeOutOfCatalog,
    /// E005: Motif group references an unknown motif id
    UnknownMotif,
    /// E006: Motif definition is malformed
    InvalidMotif,
    /// E007: Base scale offset range has min > max
    InvalidOffsetRange,
    /// E008: Voice profile override does not cover every voice
    ShortVoiceProfile,
    /// E009: Anchor trend candidate is empty
    EmptyAnchorTrend,
    /// E010: Authored melody step has a negative accent
    NegativeStepAccent,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::EmptyRegistry => "E001",
            ErrorCode::DuplicateVariation => "E002",
            ErrorCode::EmptyPattern => "E003",
            ErrorCode::DegreeOutOfCatalog => "E004",
            ErrorCode::UnknownMotif => "E005",
            ErrorCode::InvalidMotif => "E006",
            ErrorCode::InvalidOffsetRange => "E007",
            ErrorCode::ShortVoiceProfile => "E008",
            ErrorCode::EmptyAnchorTrend => "E009",
            ErrorCode::NegativeStepAccent => "E010",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for registry validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Preset line count differs from the degree pattern length
    PresetCountMismatch,
    /// W002: Variation has no fallback melody pattern of its own
    MissingFallbackPattern,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::PresetCountMismatch => "W001",
            WarningCode::MissingFallbackPattern => "W002",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// JSON path to the problematic field (e.g., "variations\[0\].pattern").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a JSON path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// JSON path to the problematic field.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning with a JSON path.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Result of registry validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.ok = false;
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Returns true if any error carries the given code.
    pub fn has_error(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Returns true if any warning carries the given code.
    pub fn has_warning(&self, code: WarningCode) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }

}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

/// Top-level error type for loading registries.
#[derive(Debug, Error)]
pub enum SpecError {
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-integrity errors.
///
/// These come from static configuration (degree patterns, catalogs, registries),
/// never from user input, and are not recoverable at generation time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("degree {degree} has no chord template (catalog holds {len} entries)")]
    DegreeOutOfRange { degree: u8, len: usize },
    #[error("invalid registry: {errors} error(s), first: {first}")]
    InvalidRegistry { errors: usize, first: String },
}

/// Common trait for engine errors.
///
/// Gives every error a stable code and a category so callers can report
/// failures uniformly.
///
/// # Example
///
/// ```ignore
/// use canonic_spec::error::EngineError;
///
/// fn handle_error<E: EngineError>(err: E) {
///     eprintln!("[{}] {}", err.code(), err.message());
/// }
/// ```
pub trait EngineError: std::error::Error {
    /// Stable error code, e.g. "CANON_CONFIG_001".
    fn code(&self) -> &'static str;

    /// Human-readable message; defaults to `Display`.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Error category, e.g. "config" or "compose".
    fn category(&self) -> &'static str;
}

impl EngineError for ConfigError {
    fn code(&self) -> &'static str {
        match self {
            ConfigError::DegreeOutOfRange { .. } => "CANON_CONFIG_001",
            ConfigError::InvalidRegistry { .. } => "CANON_CONFIG_002",
        }
    }

    fn category(&self) -> &'static str {
        "config"
    }
}

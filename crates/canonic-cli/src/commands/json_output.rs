//! JSON output types for machine-readable CLI output (`--json`).

use serde::{Deserialize, Serialize};

use canonic_spec::{
    CanonState, MelodyParams, MelodyStep, Registry, ValidationError, ValidationResult,
    ValidationWarning, Variation,
};

/// A structured error or warning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonDiagnostic {
    /// Stable code (e.g., "E004", "W001")
    pub code: String,
    pub message: String,
    /// JSON path to the offending registry field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl From<&ValidationError> for JsonDiagnostic {
    fn from(error: &ValidationError) -> Self {
        Self {
            code: error.code.code().to_string(),
            message: error.message.clone(),
            path: error.path.clone(),
        }
    }
}

impl From<&ValidationWarning> for JsonDiagnostic {
    fn from(warning: &ValidationWarning) -> Self {
        Self {
            code: warning.code.code().to_string(),
            message: warning.message.clone(),
            path: warning.path.clone(),
        }
    }
}

/// Output of `canonic state --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StateOutput {
    pub engine: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    pub state: CanonState,
}

/// Output of `canonic melody --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MelodyOutput {
    pub engine: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    pub state: CanonState,
    pub params: MelodyParams,
    pub melody: Vec<MelodyStep>,
}

/// One row of `canonic variations --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VariationSummary {
    pub name: String,
    pub degrees: Vec<u8>,
    pub offset_range: [f64; 2],
    pub anchor_trends: usize,
    pub preset_lines: usize,
    /// True when the preset lines will actually be used.
    pub presets_active: bool,
    pub melody_patterns: usize,
    pub custom_motif_groups: bool,
}

impl VariationSummary {
    pub fn new(variation: &Variation) -> Self {
        let range = variation.offset_range();
        Self {
            name: variation.name.clone(),
            degrees: variation.pattern.iter().map(|d| d.get()).collect(),
            offset_range: [range.min(), range.max()],
            anchor_trends: variation.anchor_trends.len(),
            preset_lines: variation.preset_lines.as_ref().map_or(0, Vec::len),
            presets_active: variation
                .preset_lines_for(variation.pattern.len())
                .is_some(),
            melody_patterns: variation.melody_patterns.len(),
            custom_motif_groups: variation.motif_groups.is_some(),
        }
    }

    pub fn all(registry: &Registry) -> Vec<Self> {
        registry.variations.iter().map(Self::new).collect()
    }
}

/// Output of `canonic validate --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidateOutput {
    pub ok: bool,
    /// Registry file, or "builtin"
    pub source: String,
    pub errors: Vec<JsonDiagnostic>,
    pub warnings: Vec<JsonDiagnostic>,
}

impl ValidateOutput {
    pub fn from_result(source: impl Into<String>, result: &ValidationResult) -> Self {
        Self {
            ok: result.is_ok(),
            source: source.into(),
            errors: result.errors.iter().map(JsonDiagnostic::from).collect(),
            warnings: result.warnings.iter().map(JsonDiagnostic::from).collect(),
        }
    }
}

/// Serializes an output value, pretty or compact.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

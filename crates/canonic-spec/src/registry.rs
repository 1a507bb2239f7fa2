//! The registry: every static table the generator reads.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::melody::StepTemplate;
use crate::motif::{MotifGroups, MotifLibrary};
use crate::variation::Variation;

/// Immutable generator configuration.
///
/// Lookups return `Option`; fallback policy lives with the callers that
/// select variations and motifs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Registry {
    pub motifs: MotifLibrary,
    /// Registered variations, in registration order.
    pub variations: Vec<Variation>,
    /// Group map for variations without their own.
    pub default_motif_groups: MotifGroups,
    /// Contours for variations without their own.
    pub default_anchor_trends: Vec<Vec<i32>>,
    /// Static melody for variations without fallback patterns.
    pub default_melody_pattern: Vec<StepTemplate>,
}

impl Registry {
    /// Parses a registry from JSON.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a registry file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SpecError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Variation by exact name.
    pub fn variation(&self, name: &str) -> Option<&Variation> {
        self.variations.iter().find(|v| v.name == name)
    }

    /// First registered variation.
    pub fn first_variation(&self) -> Option<&Variation> {
        self.variations.first()
    }

    pub fn variation_names(&self) -> impl Iterator<Item = &str> {
        self.variations.iter().map(|v| v.name.as_str())
    }
}

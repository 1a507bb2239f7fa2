//! Motifs, motif groups and the motif library.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::note::NoteLength;

/// Jitter probability for motifs that do not declare one.
pub const DEFAULT_JITTER: f64 = 0.15;

/// Per-step accent decay for motifs that do not declare accents.
pub const ACCENT_DECAY: f64 = 0.06;

/// Motif used whenever a lookup comes up empty.
pub const FALLBACK_MOTIF_ID: &str = "descent";

/// A short pitch/rhythm fragment applied at an anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Motif {
    /// Relative pitch steps from the anchor.
    pub steps: Vec<i32>,
    /// Duration per step; the last value repeats when steps run longer.
    pub durations: Vec<NoteLength>,
    /// Accent per step; decays by `ACCENT_DECAY` per step when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accents: Option<Vec<f64>>,
    /// Probability of a ±1 pitch jitter per step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jitter: Option<f64>,
}

impl Motif {
    pub fn new(
        steps: &[i32],
        durations: &[NoteLength],
        accents: &[f64],
        jitter: f64,
    ) -> Self {
        Self {
            steps: steps.to_vec(),
            durations: durations.to_vec(),
            accents: Some(accents.to_vec()),
            jitter: Some(jitter),
        }
    }

    /// Duration for a step index, repeating the last declared duration.
    pub fn duration_at(&self, index: usize) -> Option<NoteLength> {
        self.durations
            .get(index)
            .or_else(|| self.durations.last())
            .copied()
    }

    /// Accent for a step index.
    ///
    /// Motifs without an accent list decay linearly; a list shorter than the
    /// step list also falls back to the decay for the missing entries.
    pub fn accent_at(&self, index: usize) -> f64 {
        self.accents
            .as_ref()
            .and_then(|accents| accents.get(index).copied())
            .unwrap_or(1.0 - ACCENT_DECAY * index as f64)
    }

    pub fn jitter(&self) -> f64 {
        self.jitter.unwrap_or(DEFAULT_JITTER)
    }
}

/// Harmonic/positional context a motif can be chosen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotifGroup {
    Opening,
    Cadence,
    Tonic,
    Dominant,
    Relative,
    Predominant,
    Mediant,
    Default,
}

impl MotifGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            MotifGroup::Opening => "opening",
            MotifGroup::Cadence => "cadence",
            MotifGroup::Tonic => "tonic",
            MotifGroup::Dominant => "dominant",
            MotifGroup::Relative => "relative",
            MotifGroup::Predominant => "predominant",
            MotifGroup::Mediant => "mediant",
            MotifGroup::Default => "default",
        }
    }
}

impl fmt::Display for MotifGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Motif ids eligible per group.
pub type MotifGroups = BTreeMap<MotifGroup, Vec<String>>;

/// Builds a group map from static slices.
pub fn motif_groups(entries: &[(MotifGroup, &[&str])]) -> MotifGroups {
    entries
        .iter()
        .map(|(group, ids)| (*group, ids.iter().map(|id| id.to_string()).collect()))
        .collect()
}

/// Named motifs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MotifLibrary {
    motifs: BTreeMap<String, Motif>,
}

impl MotifLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, motif: Motif) {
        self.motifs.insert(id.into(), motif);
    }

    /// Motif for an id, `None` when the id is not registered.
    pub fn get(&self, id: &str) -> Option<&Motif> {
        self.motifs.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.motifs.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.motifs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motifs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Motif)> {
        self.motifs.iter().map(|(id, motif)| (id.as_str(), motif))
    }
}

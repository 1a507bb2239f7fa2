//! Melody steps, both authored (templates) and rendered.

use serde::{Deserialize, Serialize};

use crate::note::NoteLength;

/// One playable event: an absolute scale index, a duration and an accent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MelodyStep {
    /// Absolute position in the externally expanded scale array.
    pub scale_index: usize,
    /// Transport duration.
    pub duration: NoteLength,
    /// Velocity multiplier (>= 0).
    pub accent: f64,
}

impl MelodyStep {
    pub fn new(scale_index: usize, duration: NoteLength, accent: f64) -> Self {
        Self {
            scale_index,
            duration,
            accent,
        }
    }
}

/// Where an authored step lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepTarget {
    /// Offset from the current anchor (or base index for fallback patterns).
    Offset(i32),
    /// Absolute scale index, ignoring the anchor.
    ScaleIndex(usize),
}

fn default_accent() -> f64 {
    1.0
}

/// An authored step inside a preset line or a fallback pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepTemplate {
    #[serde(flatten)]
    pub target: StepTarget,
    pub duration: NoteLength,
    #[serde(default = "default_accent")]
    pub accent: f64,
}

impl StepTemplate {
    /// A step relative to the anchor.
    pub fn offset(offset: i32, duration: NoteLength, accent: f64) -> Self {
        Self {
            target: StepTarget::Offset(offset),
            duration,
            accent,
        }
    }

    /// A step at a fixed scale index.
    pub fn absolute(scale_index: usize, duration: NoteLength, accent: f64) -> Self {
        Self {
            target: StepTarget::ScaleIndex(scale_index),
            duration,
            accent,
        }
    }

    /// Unclamped target index for a given anchor; saturates instead of wrapping.
    pub fn raw_index(&self, anchor: i64) -> i64 {
        match self.target {
            StepTarget::Offset(offset) => anchor.saturating_add(i64::from(offset)),
            StepTarget::ScaleIndex(index) => i64::try_from(index).unwrap_or(i64::MAX),
        }
    }
}

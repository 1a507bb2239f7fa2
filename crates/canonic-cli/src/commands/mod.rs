//! CLI command implementations

pub mod json_output;
pub mod melody;
pub mod state;
pub mod validate;
pub mod variations;

/// Options shared by the generating commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Preferred variation; unknown names fall back inside the engine.
    pub variation: Option<String>,
    pub voices: Option<u32>,
    pub seed: Option<u32>,
    /// Custom registry JSON file; built-in registry when unset.
    pub registry: Option<String>,
    pub json: bool,
    pub pretty: bool,
}

impl GenerateOptions {
    fn state_options(&self) -> canonic_spec::StateOptions {
        canonic_spec::StateOptions {
            variation: self.variation.clone(),
            requested_voices: self.voices,
        }
    }
}

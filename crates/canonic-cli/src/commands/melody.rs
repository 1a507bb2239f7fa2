//! Melody command implementation
//!
//! Generates a canon state, then renders its melody for a scale length.

use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;

use canonic_engine::ENGINE_ID;
use canonic_spec::MelodyStep;

use super::json_output::{to_json, MelodyOutput};
use super::state::print_state;
use super::GenerateOptions;
use crate::input::{load_engine, RngPair};

/// Scale length used when none is given (two octaves of a heptatonic scale plus one).
pub const DEFAULT_SCALE_LENGTH: usize = 15;

/// Run the melody command
///
/// # Arguments
/// * `options` - Shared generation options
/// * `scale_length` - Entries in the expanded scale the indices address
///
/// # Returns
/// Exit code: 0 on success
pub fn run(options: &GenerateOptions, scale_length: usize) -> Result<ExitCode> {
    let engine = load_engine(options.registry.as_deref())?;
    let mut rngs = RngPair::new(options.seed);
    let state = engine
        .generate_state(&options.state_options(), &mut rngs.state)
        .context("Failed to generate canon state")?;
    let params = state.melody_params(scale_length);
    let melody = engine
        .melody(&params, &mut rngs.melody)
        .with_context(|| format!("Failed to render melody for scale length {}", scale_length))?;

    if options.json {
        let output = MelodyOutput {
            engine: ENGINE_ID.to_string(),
            seed: options.seed,
            state,
            params,
            melody,
        };
        println!("{}", to_json(&output, options.pretty)?);
    } else {
        print_state(&state);
        println!(
            "{} {} steps (base index {}, scale length {})",
            "Melody:".cyan().bold(),
            melody.len(),
            params.base_scale_index,
            scale_length
        );
        print_steps(&melody);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_steps(steps: &[MelodyStep]) {
    println!("  {:>4}  {:>5}  {:>4}  {:>6}", "#", "index", "dur", "accent");
    for (i, step) in steps.iter().enumerate() {
        println!(
            "  {:>4}  {:>5}  {:>4}  {:>6.2}",
            i,
            step.scale_index,
            step.duration.token(),
            step.accent
        );
    }
}

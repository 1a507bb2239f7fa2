//! State command implementation
//!
//! Generates a canon state and prints it.

use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;

use canonic_engine::ENGINE_ID;
use canonic_spec::CanonState;

use super::json_output::{to_json, StateOutput};
use super::GenerateOptions;
use crate::input::{load_engine, RngPair};

/// Run the state command
///
/// # Returns
/// Exit code: 0 on success
pub fn run(options: &GenerateOptions) -> Result<ExitCode> {
    let engine = load_engine(options.registry.as_deref())?;
    let mut rngs = RngPair::new(options.seed);
    let state = engine
        .generate_state(&options.state_options(), &mut rngs.state)
        .context("Failed to generate canon state")?;

    if options.json {
        let output = StateOutput {
            engine: ENGINE_ID.to_string(),
            seed: options.seed,
            state,
        };
        println!("{}", to_json(&output, options.pretty)?);
    } else {
        print_state(&state);
    }
    Ok(ExitCode::SUCCESS)
}

/// Human-readable state summary.
pub(crate) fn print_state(state: &CanonState) {
    let degrees: Vec<String> = state.degrees.iter().map(|d| d.to_string()).collect();
    let settings = &state.voice_settings;

    println!("{} {}", "Variation:".cyan().bold(), state.variation_name);
    println!("{} {}", "Degrees:".dimmed(), degrees.join(" "));
    println!(
        "{} {} (entry every {})",
        "Voices:".dimmed(),
        settings.voices,
        settings.entry_interval
    );
    for voice in 0..settings.voices as usize {
        println!(
            "  voice {}: velocity {:.2}, transpose {:+}, enters at beat {}",
            voice + 1,
            settings.velocity(voice).unwrap_or_default(),
            settings.transpose(voice).unwrap_or_default(),
            settings.entry_offset_beats(voice)
        );
    }
    println!("{} {}", "Base offset:".dimmed(), state.base_scale_offset);
    println!("{} {:?}", "Anchor trend:".dimmed(), state.anchor_trend);
    println!("{}", "Chords:".dimmed());
    for chord in &state.chords {
        println!(
            "  {} {:?} -> {:?}",
            chord.degree.to_string().bold(),
            chord.intervals,
            chord.next_degrees
        );
    }
}

//! Variations command implementation
//!
//! Lists the variations of a registry.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;

use super::json_output::{to_json, VariationSummary};
use crate::input::load_registry;

/// Run the variations command
pub fn run(registry_path: Option<&str>, json: bool, pretty: bool) -> Result<ExitCode> {
    let registry = load_registry(registry_path)?;
    let summaries = VariationSummary::all(&registry);

    if json {
        println!("{}", to_json(&summaries, pretty)?);
        return Ok(ExitCode::SUCCESS);
    }

    for summary in &summaries {
        let degrees: Vec<String> = summary.degrees.iter().map(u8::to_string).collect();
        println!("{}", summary.name.bold());
        println!("  {} {}", "degrees:".dimmed(), degrees.join(" "));
        println!(
            "  {} [{}, {}]",
            "offset range:".dimmed(),
            summary.offset_range[0],
            summary.offset_range[1]
        );
        let presets = if summary.presets_active {
            format!("{} (active)", summary.preset_lines).green()
        } else {
            summary.preset_lines.to_string().normal()
        };
        println!("  {} {}", "preset lines:".dimmed(), presets);
        println!(
            "  {} {}",
            "fallback patterns:".dimmed(),
            summary.melody_patterns
        );
    }
    println!(
        "\n{} {} variation(s), {} motif(s)",
        "Registry:".cyan().bold(),
        registry.variations.len(),
        registry.motifs.len()
    );
    Ok(ExitCode::SUCCESS)
}

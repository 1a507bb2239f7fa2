//! Validate command implementation
//!
//! Validates a registry against the major diatonic catalog.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;

use canonic_spec::{validate_registry, DiatonicCatalog, ValidationResult};

use super::json_output::{to_json, ValidateOutput};
use crate::input::load_registry;

/// Run the validate command
///
/// # Arguments
/// * `registry_path` - Registry JSON file; the built-in registry when `None`
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(registry_path: Option<&str>, json_output: bool, pretty: bool) -> Result<ExitCode> {
    let source = registry_path.unwrap_or("builtin");
    let registry = load_registry(registry_path)?;
    let result = validate_registry(&registry, &DiatonicCatalog::major());

    if json_output {
        let output = ValidateOutput::from_result(source, &result);
        println!("{}", to_json(&output, pretty)?);
    } else {
        println!("{} {}", "Validating:".cyan().bold(), source);
        print_validation_results(&result);
    }

    if result.is_ok() {
        if !json_output {
            println!("\n{} Registry is valid", "SUCCESS".green().bold());
        }
        Ok(ExitCode::SUCCESS)
    } else {
        if !json_output {
            println!(
                "\n{} Registry has {} error(s)",
                "FAILED".red().bold(),
                result.errors.len()
            );
        }
        Ok(ExitCode::from(1))
    }
}

fn print_validation_results(result: &ValidationResult) {
    for error in &result.errors {
        println!("  {} {}", "x".red(), error);
    }
    for warning in &result.warnings {
        println!("  {} {}", "!".yellow(), warning);
    }
}

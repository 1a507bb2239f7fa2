//! Integration tests for the CLI commands.
//!
//! Commands run against the built-in registry and against registry files
//! written to temporary directories.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use canonic_cli::commands::json_output::ValidateOutput;
use canonic_cli::commands::{melody, state, validate, variations, GenerateOptions};
use canonic_engine::builtin_registry;
use canonic_spec::{validate_registry, DiatonicCatalog, Registry, Variation};

// =============================================================================
// Helper Functions
// =============================================================================

fn is_success(code: ExitCode) -> bool {
    format!("{:?}", code) == format!("{:?}", ExitCode::SUCCESS)
}

fn write_registry(dir: &TempDir, name: &str, registry: &Registry) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, registry.to_json_pretty().unwrap()).unwrap();
    path
}

fn broken_registry() -> Registry {
    let mut registry = builtin_registry();
    registry.variations[1].motif_groups = registry.variations[1].motif_groups.take().map(|mut g| {
        g.insert(canonic_spec::MotifGroup::Tonic, vec!["missing".to_string()]);
        g
    });
    registry
}

fn seeded(registry: Option<&PathBuf>) -> GenerateOptions {
    GenerateOptions {
        variation: Some("classic".to_string()),
        voices: Some(2),
        seed: Some(42),
        registry: registry.map(|p| p.to_string_lossy().into_owned()),
        json: true,
        pretty: false,
    }
}

// =============================================================================
// validate
// =============================================================================

#[test]
fn validate_builtin_registry_succeeds() {
    assert!(is_success(validate::run(None, false, false).unwrap()));
    assert!(is_success(validate::run(None, true, true).unwrap()));
}

#[test]
fn validate_reports_unknown_motif() {
    let dir = TempDir::new().unwrap();
    let path = write_registry(&dir, "broken.json", &broken_registry());
    let path_str = path.to_str().unwrap();

    assert!(!is_success(validate::run(Some(path_str), false, false).unwrap()));
    assert!(!is_success(validate::run(Some(path_str), true, false).unwrap()));

    let result = validate_registry(&broken_registry(), &DiatonicCatalog::major());
    let output = ValidateOutput::from_result(path_str, &result);
    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].code, "E005");
    assert_eq!(
        output.errors[0].path.as_deref(),
        Some("variations[1].motif_groups.tonic")
    );
}

#[test]
fn validate_malformed_json_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ \"motifs\": ").unwrap();
    let err = validate::run(path.to_str(), false, false).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to load registry file"));
}

// =============================================================================
// state / melody / variations
// =============================================================================

#[test]
fn state_and_melody_with_builtin_registry() {
    assert!(is_success(state::run(&seeded(None)).unwrap()));
    assert!(is_success(melody::run(&seeded(None), 15).unwrap()));

    let human = GenerateOptions {
        json: false,
        ..seeded(None)
    };
    assert!(is_success(melody::run(&human, 22).unwrap()));
}

#[test]
fn melody_with_custom_registry() {
    let dir = TempDir::new().unwrap();
    let mut registry = builtin_registry();
    let mut extra = Variation::new("solo", canonic_spec::degrees(&[1, 4, 5, 1]).unwrap());
    extra.melody_patterns = vec![registry.default_melody_pattern.clone()];
    registry.variations.push(extra);
    let path = write_registry(&dir, "custom.json", &registry);

    let options = GenerateOptions {
        variation: Some("solo".to_string()),
        ..seeded(Some(&path))
    };
    assert!(is_success(melody::run(&options, 15).unwrap()));
    assert!(is_success(variations::run(path.to_str(), true, true).unwrap()));
}

#[test]
fn generating_commands_refuse_invalid_registry() {
    let dir = TempDir::new().unwrap();
    let path = write_registry(&dir, "broken.json", &broken_registry());
    let err = state::run(&seeded(Some(&path))).unwrap_err();
    assert!(format!("{:#}", err).contains("E005"));
    assert!(melody::run(&seeded(Some(&path)), 15).is_err());
}

#[test]
fn melody_with_empty_scale_fails() {
    let err = melody::run(&seeded(None), 0).unwrap_err();
    assert!(format!("{:#}", err).contains("scale length"));
}

#[test]
fn variations_lists_builtin() {
    assert!(is_success(variations::run(None, false, false).unwrap()));
}

//! CLI argument definitions for the canonic command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{ArgAction, Args, Parser, Subcommand};

use canonic_cli::commands::melody::DEFAULT_SCALE_LENGTH;
use canonic_cli::commands::GenerateOptions;

/// Canonic - procedural canon progressions and melodies
#[derive(Parser)]
#[command(name = "canonic")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Log engine decisions to stderr (-v for fallbacks, -vv for every position)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate a canon state (variation, chords, voices, contour)
    State {
        #[command(flatten)]
        generate: GenerateArgs,
    },

    /// Generate a canon state and render its melody
    Melody {
        #[command(flatten)]
        generate: GenerateArgs,

        /// Number of entries in the expanded scale the melody indexes
        #[arg(long, default_value_t = DEFAULT_SCALE_LENGTH)]
        scale_length: usize,
    },

    /// List the variations of a registry
    Variations {
        /// Registry JSON file (default: built-in registry)
        #[arg(short, long)]
        registry: Option<String>,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Validate a registry against the major diatonic catalog
    Validate {
        /// Registry JSON file (default: built-in registry)
        #[arg(short, long)]
        registry: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Variation name (unknown or omitted: picked at random)
    #[arg(long)]
    pub variation: Option<String>,

    /// Voice count, clamped to 1-3
    #[arg(long)]
    pub voices: Option<u32>,

    /// Seed for reproducible output (default: OS entropy)
    #[arg(short, long)]
    pub seed: Option<u32>,

    /// Registry JSON file (default: built-in registry)
    #[arg(short, long)]
    pub registry: Option<String>,

    /// Output machine-readable JSON
    #[arg(long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl From<GenerateArgs> for GenerateOptions {
    fn from(args: GenerateArgs) -> Self {
        Self {
            variation: args.variation,
            voices: args.voices,
            seed: args.seed,
            registry: args.registry,
            json: args.json,
            pretty: args.pretty,
        }
    }
}

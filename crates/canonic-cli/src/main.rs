//! Canonic CLI - command-line caller for the canon generator
//!
//! Generates canon states and melodies from the built-in or a custom
//! registry, lists variations and validates registry files.

use std::process::ExitCode;

use clap::Parser;

use canonic_cli::{commands, logging};

mod cli_args;

use cli_args::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: {}", colored::Colorize::yellow("warning"), e);
    }

    let result = match cli.command {
        Commands::State { generate } => commands::state::run(&generate.into()),
        Commands::Melody {
            generate,
            scale_length,
        } => commands::melody::run(&generate.into(), scale_length),
        Commands::Variations {
            registry,
            json,
            pretty,
        } => commands::variations::run(registry.as_deref(), json, pretty),
        Commands::Validate {
            registry,
            json,
            pretty,
        } => commands::validate::run(registry.as_deref(), json, pretty),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

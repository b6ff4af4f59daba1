//! Main entry point for the forcecrc32 CLI

mod cli;

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap::Parser;
use clap_complete::{Generator, generate};
use std::io;

use crate::cli::Cli;

fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logger; -v/-q pick the default filter, RUST_LOG overrides
    let level = if cli.quiet {
        log::LevelFilter::Error
    } else {
        match cli.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Some(shell) = cli.completions {
        print_completions(shell, &mut Cli::command());
        return Ok(());
    }

    let (file, offset, new_crc) = cli
        .patch_args()
        .context("FILE, OFFSET and NEWCRC are required")?;

    let report = forcecrc32::force_crc32(file, offset, new_crc)
        .with_context(|| format!("failed to patch {}", file.display()))?;

    if !cli.quiet {
        println!("Original CRC-32: {:08X}", report.original_crc);
        println!("Computed and wrote patch");
        println!("New CRC-32 successfully verified: {:08X}", report.new_crc);
    }

    Ok(())
}

fn print_completions<G: Generator>(generator: G, cmd: &mut clap::Command) {
    generate(
        generator,
        cmd,
        cmd.get_name().to_string(),
        &mut io::stdout(),
    );
}

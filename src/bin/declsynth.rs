//! Command-line front end: one synthesis round from a declaration snapshot.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;
use declsynth::prelude::*;

/// declsynth: generate logging wrappers, copy and toNiceString extensions.
///
/// Reads the declarations of one round from a TOML snapshot and writes the
/// generated Kotlin files under the output directory, one directory level
/// per namespace segment.
#[derive(Parser, Debug)]
#[command(name = "declsynth", version, about)]
struct Cli {
    /// Declaration snapshot (TOML)
    #[arg(long, value_name = "FILE")]
    snapshot: PathBuf,

    /// Root directory for generated files
    #[arg(long, value_name = "DIR")]
    out: PathBuf,

    /// Synthesis configuration (TOML); defaults apply when absent
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Fixed provenance timestamp (RFC 3339), for reproducible output
    #[arg(long, value_name = "RFC3339")]
    timestamp: Option<DateTime<Utc>>,
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();
    run(&cli, &mut io::stdout().lock(), &mut io::stderr().lock())
}

fn run(cli: &Cli, out: &mut dyn Write, err: &mut dyn Write) -> anyhow::Result<ExitCode> {
    let mut config = match &cli.config {
        Some(path) => SynthesisConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SynthesisConfig::default(),
    };
    if let Some(timestamp) = cli.timestamp {
        config.timestamp = Some(timestamp);
    }

    let snapshot = DeclarationSnapshot::from_file(&cli.snapshot)
        .with_context(|| format!("loading snapshot {}", cli.snapshot.display()))?;

    let mut diagnostics = DiagnosticLog::new();
    let mut emitter =
        FileSystemEmitter::new(&cli.out, config.file_extension.clone(), config.indent());
    let result = run_round(&snapshot, &config, &mut diagnostics, &mut emitter);

    // Diagnostics collected before a fatal error still reach the user.
    for diagnostic in diagnostics.entries() {
        writeln!(err, "{diagnostic}")?;
    }
    let report = result.context("synthesis round failed")?;

    for path in emitter.written() {
        writeln!(out, "{}", path.display())?;
    }
    writeln!(
        out,
        "{} file(s) generated, {} error(s), {} warning(s)",
        report.units.len(),
        report.errors,
        report.warnings
    )?;

    Ok(if report.has_errors() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

// Common test utilities and helpers
#![allow(dead_code)]

use std::path::PathBuf;

use chrono::{DateTime, TimeZone, Utc};
use declsynth::prelude::*;

/// Fixed round timestamp so generated text is comparable
pub fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap()
}

pub fn test_config() -> SynthesisConfig {
    SynthesisConfig::builder()
        .generator("io.declsynth.test")
        .origin_comment("integration test")
        .timestamp(fixed_timestamp())
        .build()
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn playground() -> DeclarationSnapshot {
    DeclarationSnapshot::from_file(fixture_path("playground.toml")).expect("playground fixture loads")
}

/// Run one round into memory
pub fn run_in_memory(
    model: &dyn DeclarationModel,
    config: &SynthesisConfig,
) -> (RoundReport, DiagnosticLog, MemoryEmitter) {
    let mut diagnostics = DiagnosticLog::new();
    let mut emitter = MemoryEmitter::with_indent(config.indent());
    let report =
        run_round(model, config, &mut diagnostics, &mut emitter).expect("round completes");
    (report, diagnostics, emitter)
}

/// Rendered source of one unit
pub fn source_of(emitter: &MemoryEmitter, namespace: &str, file: &str) -> String {
    emitter
        .sources()
        .remove(&format!("{namespace}/{file}"))
        .unwrap_or_else(|| panic!("no unit {namespace}/{file}"))
}

/// The same text with every provenance date replaced, for comparisons across rounds
pub fn without_dates(source: &str) -> String {
    source
        .lines()
        .map(|line| match line.find("date = \"") {
            Some(start) => {
                let value_start = start + "date = \"".len();
                let end = line[value_start..]
                    .find('"')
                    .map(|offset| value_start + offset)
                    .unwrap_or(line.len());
                format!("{}date = \"<date>{}", &line[..start], &line[end..])
            }
            None => line.to_string(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// Whole-round behaviour: batching, persistence and repeatability

mod common;

use std::fmt::Write as _;
use std::fs;

use chrono::{Duration, TimeZone, Utc};
use common::*;
use declsynth::prelude::*;
use quickcheck::{QuickCheck, TestResult};

#[test]
fn test_playground_round_summary() {
    let (report, diagnostics, emitter) = run_in_memory(&playground(), &test_config());

    let emitted: Vec<String> = report
        .units
        .iter()
        .map(|unit| format!("{}/{}", unit.namespace, unit.file_identifier))
        .collect();
    assert_eq!(
        emitted,
        vec![
            "kmeta.loggable/ApiServiceLoggerImpl",
            "kmeta.mimicDataClass/CopyExtension",
            "kmeta.mimicDataClass/ToNiceStringExtension",
        ]
    );
    assert_eq!(report.timestamp, fixed_timestamp());
    assert_eq!(report.errors, 1);
    assert_eq!(report.warnings, 0);
    assert_eq!(diagnostics.entries().len(), 1);
    assert_eq!(emitter.units().len(), 3);
    assert!(emitter.units().iter().all(|unit| !unit.is_cacheable()));
}

#[test]
fn test_filesystem_emitter_writes_namespace_directories() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config();
    let mut diagnostics = DiagnosticLog::new();
    let mut emitter = FileSystemEmitter::new(dir.path(), "kt", config.indent());

    let report = run_round(&playground(), &config, &mut diagnostics, &mut emitter).unwrap();
    assert_eq!(emitter.written().len(), report.units.len());

    let wrapper = dir.path().join("kmeta/loggable/ApiServiceLoggerImpl.kt");
    let copy = dir.path().join("kmeta/mimicDataClass/CopyExtension.kt");
    let nice = dir.path().join("kmeta/mimicDataClass/ToNiceStringExtension.kt");
    for path in [&wrapper, &copy, &nice] {
        assert!(path.is_file(), "{} was not written", path.display());
    }

    let (_, _, memory) = run_in_memory(&playground(), &config);
    assert_eq!(
        fs::read_to_string(&copy).unwrap(),
        source_of(&memory, "kmeta.mimicDataClass", "CopyExtension")
    );
}

#[test]
fn test_config_file_changes_log_function_and_indent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("declsynth.toml");
    fs::write(
        &path,
        r#"
generator = "io.declsynth.test"
origin_comment = "integration test"
log_function = "Log.d"
indent_width = 2
timestamp = "2024-06-01T12:30:00Z"
"#,
    )
    .unwrap();
    let config = SynthesisConfig::from_file(&path).unwrap();
    let (_, _, emitter) = run_in_memory(&playground(), &config);
    let source = source_of(&emitter, "kmeta.loggable", "ApiServiceLoggerImpl");
    assert!(source.contains("\n  override fun testVararg(a: Int, vararg f: Float) {\n"));
    assert!(source.contains("    Log.d(\"MyLogTag: testVararg(a=${a}, f=${f.toList()})\")\n"));
    assert!(!source.contains("println("));
}

#[test]
fn test_emitter_failure_aborts_the_round() {
    struct Rejecting;

    impl Emitter for Rejecting {
        fn submit(&mut self, unit: GeneratedUnit) -> Result<(), EmitError> {
            Err(EmitError::DuplicateUnit {
                namespace: unit.namespace().to_string(),
                file: unit.file_identifier().to_string(),
            })
        }
    }

    let mut diagnostics = DiagnosticLog::new();
    let result = run_round(&playground(), &test_config(), &mut diagnostics, &mut Rejecting);
    assert!(matches!(
        result,
        Err(SynthesisError::Emit(EmitError::DuplicateUnit { .. }))
    ));
}

#[test]
fn test_empty_model_emits_nothing() {
    let snapshot = DeclarationSnapshot::from_toml_str("").unwrap();
    let (report, diagnostics, emitter) = run_in_memory(&snapshot, &test_config());
    assert!(report.units.is_empty());
    assert!(diagnostics.entries().is_empty());
    assert!(emitter.units().is_empty());
}

/// A snapshot of `Copy` + `ToNiceString` classes across two namespaces,
/// one class per entry of `field_counts`.
fn generated_snapshot(field_counts: &[u8]) -> String {
    let mut toml = String::new();
    for (index, count) in field_counts.iter().enumerate() {
        let namespace = if index % 2 == 0 { "gen.even" } else { "gen.odd" };
        let _ = writeln!(toml, "[[declarations]]");
        let _ = writeln!(toml, "name = \"{namespace}.C{index}\"");
        let _ = writeln!(toml, "kind = \"class\"");
        let _ = writeln!(
            toml,
            "annotations = [{{ name = \"Copy\" }}, {{ name = \"ToNiceString\" }}]"
        );
        let fields: Vec<String> = (0..=(count % 4))
            .map(|field| format!("{{ name = \"f{field}\", type = \"Int\", binding = \"val\" }}"))
            .collect();
        let _ = writeln!(toml, "constructor = [{}]", fields.join(", "));
    }
    toml
}

#[test]
fn test_rounds_are_repeatable_apart_from_dates() {
    fn prop(field_counts: Vec<u8>) -> TestResult {
        if field_counts.len() > 12 {
            return TestResult::discard();
        }
        let snapshot = match DeclarationSnapshot::from_toml_str(&generated_snapshot(&field_counts)) {
            Ok(snapshot) => snapshot,
            Err(_) => return TestResult::failed(),
        };

        let first_time = Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap();
        let first = SynthesisConfig::builder().timestamp(first_time).build();
        let second = SynthesisConfig::builder()
            .timestamp(first_time + Duration::days(3))
            .build();

        let (first_report, _, first_out) = run_in_memory(&snapshot, &first);
        let (second_report, _, second_out) = run_in_memory(&snapshot, &second);

        let expected_units = if field_counts.is_empty() {
            0
        } else if field_counts.len() == 1 {
            2
        } else {
            4
        };
        if first_report.units != second_report.units || first_report.units.len() != expected_units {
            return TestResult::failed();
        }

        let strip = |emitter: &MemoryEmitter| -> Vec<String> {
            emitter.sources().values().map(|source| without_dates(source)).collect()
        };
        TestResult::from_bool(strip(&first_out) == strip(&second_out))
    }

    QuickCheck::new()
        .tests(50)
        .quickcheck(prop as fn(Vec<u8>) -> TestResult);
}

// Logging wrapper generation over the playground declarations

mod common;

use common::*;
use declsynth::prelude::*;

const API_SERVICE_LOGGER: &str = r#"@file:Generated(value = ["io.declsynth.test"], date = "2024-06-01T12:30:00Z", comments = "integration test")

package kmeta.loggable

import javax.annotation.processing.Generated

@Generated(value = ["io.declsynth.test"], date = "2024-06-01T12:30:00Z", comments = "integration test")
class ApiServiceLoggerImpl<T>(
    private val delegate: ApiService<T>,
) : ApiService<T> {
    override var isAuth: Boolean?
        get() {
            val result = delegate.isAuth
            println("MyLogTag: get isAuth=${result}")
            return result
        }
        set(value) {
            delegate.isAuth = value
            println("MyLogTag: set isAuth=${value}")
        }

    @Deprecated(message = "just for testing", replaceWith = ReplaceWith("test2(1)"))
    override fun testAnnotationsArePreserved() {
        delegate.testAnnotationsArePreserved()
        println("MyLogTag: testAnnotationsArePreserved()")
    }

    override fun testNoLogGenerated(a: Int) {
        delegate.testNoLogGenerated(a)
    }

    /**
     * Testing docs on function with params and return
     * @param b something
     * @return some number
     */
    override fun testDocsArePreserved(b: Int): Int {
        val result = delegate.testDocsArePreserved(b)
        println("MyLogTag: testDocsArePreserved(b=${b})->${result}")
        return result
    }

    override fun <T : Number, R> testGenericsArePossible() {
        delegate.testGenericsArePossible<T, R>()
        println("MyLogTag: testGenericsArePossible()")
    }

    override fun testVararg(a: Int, vararg f: Float) {
        delegate.testVararg(a, *f)
        println("MyLogTag: testVararg(a=${a}, f=${f.toList()})")
    }
}
"#;

#[test]
fn test_playground_wrapper_matches_expected_source() {
    let (_, _, emitter) = run_in_memory(&playground(), &test_config());
    let source = source_of(&emitter, "kmeta.loggable", "ApiServiceLoggerImpl");
    assert_eq!(source, API_SERVICE_LOGGER);
}

#[test]
fn test_every_declared_member_is_overridden() {
    let model = playground();
    let (_, _, emitter) = run_in_memory(&model, &test_config());
    let api = model
        .declaration("kmeta.loggable.ApiService")
        .expect("fixture declares ApiService");
    let source = source_of(&emitter, "kmeta.loggable", "ApiServiceLoggerImpl");

    for function in &api.functions {
        assert!(
            source.contains(&format!(" {}(", function.name)),
            "missing override of {}",
            function.name
        );
    }
    for property in &api.properties {
        assert!(source.contains(&format!("override var {}:", property.name)));
    }
}

#[test]
fn test_suppressed_members_never_log() {
    let (_, _, emitter) = run_in_memory(&playground(), &test_config());
    let source = source_of(&emitter, "kmeta.loggable", "ApiServiceLoggerImpl");
    assert!(!source.contains("MyLogTag: testNoLogGenerated"));
    assert_eq!(source.matches("println(").count(), 6);
}

#[test]
fn test_private_interface_is_reported_and_siblings_still_generate() {
    let snapshot = DeclarationSnapshot::from_toml_str(
        r#"
[[declarations]]
name = "app.Hidden"
kind = "interface"
visibility = "private"
annotations = [{ name = "Loggable" }]

[[declarations]]
name = "app.Visible"
kind = "interface"
annotations = [{ name = "Loggable" }]
functions = [{ name = "ping" }]
"#,
    )
    .unwrap();
    let (report, diagnostics, emitter) = run_in_memory(&snapshot, &test_config());

    assert_eq!(report.errors, 1);
    let error = diagnostics.errors().next().unwrap();
    assert_eq!(error.symbol, "app.Hidden");
    assert_eq!(error.message, "app.Hidden interface cannot be private");
    assert!(emitter.unit("app", "HiddenLoggerImpl").is_none());

    let visible = source_of(&emitter, "app", "VisibleLoggerImpl");
    assert!(visible.contains("println(\"VisibleLoggerImpl: ping()\")"));
}

#[test]
fn test_unresolved_return_type_is_a_warning() {
    let snapshot = DeclarationSnapshot::from_toml_str(
        r#"
[[declarations]]
name = "app.Repo"
kind = "interface"
annotations = [{ name = "Loggable", arguments = [{ name = "tag", value = "Repo" }] }]
functions = [{ name = "load", returns = "<ERROR TYPE>" }]
"#,
    )
    .unwrap();
    let (report, diagnostics, emitter) = run_in_memory(&snapshot, &test_config());
    assert_eq!(report.errors, 0);
    assert_eq!(report.warnings, 1);
    assert!(diagnostics.warnings().next().unwrap().message.contains("`load`"));
    let source = source_of(&emitter, "app", "RepoLoggerImpl");
    assert!(source.contains(
        "    override fun load() {\n        delegate.load()\n        println(\"Repo: load()\")\n    }\n"
    ));
}

#[test]
fn test_concrete_class_is_rejected() {
    let snapshot = DeclarationSnapshot::from_toml_str(
        r#"
[[declarations]]
name = "app.Service"
kind = "class"
annotations = [{ name = "Loggable" }]
constructor = []
"#,
    )
    .unwrap();
    let (report, diagnostics, emitter) = run_in_memory(&snapshot, &test_config());
    assert_eq!(report.errors, 1);
    assert_eq!(
        diagnostics.entries()[0].message,
        "@Loggable cannot be applied to class app.Service"
    );
    assert!(emitter.units().is_empty());
}

#[test]
fn test_wrapper_name_clash_is_reported_and_round_continues() {
    let snapshot = DeclarationSnapshot::from_toml_str(
        r#"
[[declarations]]
name = "a.Outer.Api"
namespace = "a"
kind = "interface"
annotations = [{ name = "Loggable" }]
functions = [{ name = "first" }]

[[declarations]]
name = "a.Other.Api"
namespace = "a"
kind = "interface"
annotations = [{ name = "Loggable" }]
functions = [{ name = "second" }]

[[declarations]]
name = "a.User"
kind = "class"
annotations = [{ name = "Copy" }]
constructor = [{ name = "id", type = "Long", binding = "val" }]
"#,
    )
    .unwrap();
    let mut diagnostics = DiagnosticLog::new();
    let config = test_config();
    let mut emitter = MemoryEmitter::with_indent(config.indent());
    let report = run_round(&snapshot, &config, &mut diagnostics, &mut emitter)
        .expect("a name clash is not fatal");

    assert_eq!(report.errors, 1);
    let error = diagnostics.errors().next().unwrap();
    assert_eq!(error.symbol, "a.Other.Api");
    assert_eq!(
        error.message,
        "a.Other.Api: generated `a.ApiLoggerImpl` clashes with the one already generated for a.Outer.Api"
    );

    let wrapper = source_of(&emitter, "a", "ApiLoggerImpl");
    assert!(wrapper.contains("delegate: Outer.Api"));
    assert!(wrapper.contains("override fun first()"));
    assert!(!wrapper.contains("second"));
    assert!(source_of(&emitter, "a", "CopyExtension").contains("fun User.copy(id: Long = this.id): User {"));
}

#[test]
fn test_ineligible_declaration_does_not_claim_the_wrapper_name() {
    let snapshot = DeclarationSnapshot::from_toml_str(
        r#"
[[declarations]]
name = "a.Outer.Api"
namespace = "a"
kind = "interface"
visibility = "private"
annotations = [{ name = "Loggable" }]

[[declarations]]
name = "a.Other.Api"
namespace = "a"
kind = "interface"
annotations = [{ name = "Loggable" }]
functions = [{ name = "second" }]
"#,
    )
    .unwrap();
    let (report, diagnostics, emitter) = run_in_memory(&snapshot, &test_config());
    assert_eq!(report.errors, 1);
    assert_eq!(diagnostics.errors().next().unwrap().symbol, "a.Outer.Api");
    assert!(source_of(&emitter, "a", "ApiLoggerImpl").contains("override fun second()"));
}

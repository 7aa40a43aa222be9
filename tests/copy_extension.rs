// Copy extension generation

mod common;

use common::*;
use declsynth::prelude::*;

const MIMIC_COPY: &str = r#"@file:Generated(value = ["io.declsynth.test"], date = "2024-06-01T12:30:00Z", comments = "integration test")

package kmeta.mimicDataClass

import javax.annotation.processing.Generated

@Generated(value = ["io.declsynth.test"], date = "2024-06-01T12:30:00Z", comments = "integration test")
fun User.copy(age: Int = this.age, name: String = this.name): User {
    return User(age, name)
}
"#;

#[test]
fn test_playground_copy_extension() {
    let (report, diagnostics, emitter) = run_in_memory(&playground(), &test_config());
    assert_eq!(
        source_of(&emitter, "kmeta.mimicDataClass", "CopyExtension"),
        MIMIC_COPY
    );

    // The private Secret class is the only failure in the playground.
    assert_eq!(report.errors, 1);
    let error = diagnostics.errors().next().unwrap();
    assert_eq!(error.symbol, "kmeta.mimicDataClass.Secret");
    assert_eq!(error.message, "kmeta.mimicDataClass.Secret class cannot be private");
}

#[test]
fn test_one_file_per_namespace_in_declaration_order() {
    let snapshot = DeclarationSnapshot::from_toml_str(
        r#"
[[declarations]]
name = "shop.Order"
kind = "class"
annotations = [{ name = "Copy" }]
constructor = [{ name = "id", type = "Long", binding = "val" }]

[[declarations]]
name = "shop.Item"
kind = "class"
annotations = [{ name = "Copy" }]
constructor = [
    { name = "sku", type = "String", binding = "val" },
    { name = "count", type = "Int", binding = "var" },
]

[[declarations]]
name = "billing.Invoice"
kind = "class"
annotations = [{ name = "Copy" }]
constructor = [{ name = "total", type = "Double", binding = "val" }]
"#,
    )
    .unwrap();
    let (report, _, emitter) = run_in_memory(&snapshot, &test_config());
    assert_eq!(report.units.len(), 2);
    assert_eq!(emitter.units().len(), 2);

    let shop = source_of(&emitter, "shop", "CopyExtension");
    let order = shop.find("fun Order.copy(").unwrap();
    let item = shop.find("fun Item.copy(").unwrap();
    assert!(order < item);
    assert!(shop.contains("fun Item.copy(sku: String = this.sku, count: Int = this.count): Item {"));
    assert_eq!(shop.matches("@Generated(").count(), 2);

    let billing = source_of(&emitter, "billing", "CopyExtension");
    assert!(billing.contains("fun Invoice.copy(total: Double = this.total): Invoice {\n    return Invoice(total)\n}\n"));
}

#[test]
fn test_constructor_problems_are_errors() {
    let snapshot = DeclarationSnapshot::from_toml_str(
        r#"
[[declarations]]
name = "app.NoCtor"
kind = "class"
annotations = [{ name = "Copy" }]

[[declarations]]
name = "app.EmptyCtor"
kind = "class"
annotations = [{ name = "Copy" }]
constructor = []

[[declarations]]
name = "app.Shape"
kind = "interface"
annotations = [{ name = "Copy" }]
"#,
    )
    .unwrap();
    let (report, diagnostics, emitter) = run_in_memory(&snapshot, &test_config());
    assert_eq!(report.errors, 3);
    assert!(emitter.units().is_empty());

    let messages: Vec<&str> = diagnostics
        .errors()
        .map(|diagnostic| diagnostic.message.as_str())
        .collect();
    assert_eq!(
        messages,
        vec![
            "app.NoCtor has no primary constructor",
            "app.EmptyCtor has an empty primary constructor",
            "@Copy cannot be applied to interface app.Shape",
        ]
    );
}

#[test]
fn test_data_class_is_skipped_with_a_warning() {
    let snapshot = DeclarationSnapshot::from_toml_str(
        r#"
[[declarations]]
name = "app.Point"
kind = "class"
modifiers = ["data"]
annotations = [{ name = "Copy" }]
constructor = [{ name = "x", type = "Int", binding = "val" }]
"#,
    )
    .unwrap();
    let (report, diagnostics, emitter) = run_in_memory(&snapshot, &test_config());
    assert!(!report.has_errors());
    assert_eq!(report.warnings, 1);
    assert_eq!(
        diagnostics.warnings().next().unwrap().message,
        "@Copy on app.Point is redundant: data classes already provide it"
    );
    assert!(emitter.units().is_empty());
}

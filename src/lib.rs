//! # declsynth
//!
//! Declaration-driven source synthesis. Given the type declarations of one
//! compilation round, generates companion Kotlin source for the declarations
//! carrying one of three markers.
//!
//! ## Features
//!
//! - **`@Loggable`**: a `<Name>LoggerImpl` class implementing the interface by
//!   delegation, logging every call and property access (`@NoLog` opts a
//!   member out)
//! - **`@Copy`**: a `copy(...)` extension function whose parameters default to
//!   the current field values
//! - **`@ToNiceString`**: a `toNiceString()` extension function rendering
//!   `Name(field=value, ...)`, recursing into marked nested types
//! - **Structured output**: every file is built as a syntax tree
//!   ([`declsynth_syntax`]) and printed by one printer
//! - **Provenance**: every generated declaration carries a `@Generated`
//!   annotation with the generator identity and the round timestamp
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use declsynth::prelude::*;
//!
//! let snapshot = DeclarationSnapshot::from_toml_str(r#"
//! [[declarations]]
//! name = "com.example.User"
//! kind = "class"
//! annotations = [{ name = "Copy" }, { name = "ToNiceString" }]
//! constructor = [
//!     { name = "age", type = "Int", binding = "val" },
//!     { name = "name", type = "String", binding = "val" },
//! ]
//! "#)?;
//!
//! let config = SynthesisConfig::builder()
//!     .timestamp(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
//!     .build();
//! let mut diagnostics = DiagnosticLog::new();
//! let mut emitter = MemoryEmitter::new();
//!
//! let report = run_round(&snapshot, &config, &mut diagnostics, &mut emitter)?;
//! assert_eq!(report.units.len(), 2);
//!
//! let sources = emitter.sources();
//! assert!(sources["com.example/CopyExtension"]
//!     .contains("fun User.copy(age: Int = this.age, name: String = this.name): User {"));
//! assert!(sources["com.example/ToNiceStringExtension"]
//!     .contains("return \"User(age=${age}, name=${name})\""));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod assembler;
pub mod config;
pub mod drivers;
pub mod error;
pub mod generators;
pub mod host;
pub mod markers;
pub mod model;
pub mod prelude;
pub mod snapshot;
pub mod unit;

pub use declsynth_syntax as syntax;

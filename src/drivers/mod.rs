//! # Synthesis Drivers
//!
//! One driver per generating directive. A driver asks the model for the
//! declarations carrying its marker, runs its generator over them in
//! discovery order and submits the resulting units:
//!
//! | Driver | Marker | Output |
//! |--------|--------|--------|
//! | [`LoggableDriver`] | `@Loggable` | one `<Name>LoggerImpl` unit per declaration |
//! | [`CopyDriver`] | `@Copy` | one `CopyExtension` unit per namespace |
//! | [`NiceStringDriver`] | `@ToNiceString` | one `ToNiceStringExtension` unit per namespace |
//!
//! Eligibility errors become diagnostics and the driver moves on. Emission
//! failures abort the round.
//!
//! ```no_run
//! use declsynth::config::SynthesisConfig;
//! use declsynth::drivers::run_round;
//! use declsynth::host::{DiagnosticLog, FileSystemEmitter};
//! use declsynth::snapshot::DeclarationSnapshot;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let snapshot = DeclarationSnapshot::from_file("declarations.toml")?;
//! let config = SynthesisConfig::default();
//! let mut diagnostics = DiagnosticLog::new();
//! let mut emitter = FileSystemEmitter::new("generated", "kt", config.indent());
//!
//! let report = run_round(&snapshot, &config, &mut diagnostics, &mut emitter)?;
//! println!("{} units, {} errors", report.units.len(), report.errors);
//! # Ok(())
//! # }
//! ```

mod copy;
mod loggable;
mod nice_string;

pub use copy::CopyDriver;
pub use loggable::LoggableDriver;
pub use nice_string::NiceStringDriver;

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use declsynth_syntax::FunSpec;
use log::{debug, info};

use crate::assembler::ExtensionUnitAssembler;
use crate::config::SynthesisConfig;
use crate::error::{EligibilityError, EmitError, SynthesisResult};
use crate::generators::{SynthesisContext, Synthesized};
use crate::host::{DeclarationModel, Diagnostics, Emitter};
use crate::markers::Directive;
use crate::model::TypeDeclaration;
use crate::unit::GeneratedUnit;

/// Processes every declaration carrying one directive.
pub trait SynthesisDriver {
    fn directive(&self) -> Directive;

    fn run(&self, round: &mut Round<'_>) -> SynthesisResult<()>;
}

/// Where an emitted unit went.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmittedUnit {
    pub namespace: String,
    pub file_identifier: String,
}

/// Outcome of one round.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundReport {
    pub units: Vec<EmittedUnit>,
    pub errors: usize,
    pub warnings: usize,
    /// Timestamp written into every provenance annotation of the round.
    pub timestamp: DateTime<Utc>,
}

impl RoundReport {
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

/// State shared by the drivers of one round.
pub struct Round<'a> {
    ctx: SynthesisContext<'a>,
    diagnostics: &'a mut dyn Diagnostics,
    emitter: &'a mut dyn Emitter,
    emitted: HashSet<EmittedUnit>,
    units: Vec<EmittedUnit>,
    errors: usize,
    warnings: usize,
}

impl<'a> Round<'a> {
    pub fn new(
        ctx: SynthesisContext<'a>,
        diagnostics: &'a mut dyn Diagnostics,
        emitter: &'a mut dyn Emitter,
    ) -> Self {
        Self {
            ctx,
            diagnostics,
            emitter,
            emitted: HashSet::new(),
            units: Vec::new(),
            errors: 0,
            warnings: 0,
        }
    }

    pub fn context(&self) -> &SynthesisContext<'a> {
        &self.ctx
    }

    /// Declarations carrying `directive`, in discovery order.
    pub fn marked(&self, directive: Directive) -> Vec<&'a TypeDeclaration> {
        let model: &'a dyn DeclarationModel = self.ctx.model;
        model.marked_with(&self.ctx.marker(directive))
    }

    pub fn report(&mut self, symbol: &str, error: &EligibilityError) {
        if error.is_warning() {
            self.warn(symbol, &error.to_string());
        } else {
            self.errors += 1;
            self.diagnostics.report_error(symbol, &error.to_string());
        }
    }

    pub fn warn(&mut self, symbol: &str, message: &str) {
        self.warnings += 1;
        self.diagnostics.report_warning(symbol, message);
    }

    /// Record the warnings of a successful generation and hand back the item.
    pub fn accept<T>(&mut self, symbol: &str, synthesized: Synthesized<T>) -> T {
        for warning in &synthesized.warnings {
            self.warn(symbol, warning);
        }
        synthesized.item
    }

    /// Submit one unit. A unit is emitted at most once per round.
    pub fn submit(&mut self, unit: GeneratedUnit) -> SynthesisResult<()> {
        let key = EmittedUnit {
            namespace: unit.namespace().to_string(),
            file_identifier: unit.file_identifier().to_string(),
        };
        if !self.emitted.insert(key.clone()) {
            return Err(EmitError::DuplicateUnit {
                namespace: key.namespace,
                file: key.file_identifier,
            }
            .into());
        }
        let members = unit.members().len();
        self.emitter.submit(unit)?;
        info!(
            "Emitted {}.{} ({} declaration(s))",
            key.namespace, key.file_identifier, members
        );
        self.units.push(key);
        Ok(())
    }

    pub fn finish(self) -> RoundReport {
        RoundReport {
            units: self.units,
            errors: self.errors,
            warnings: self.warnings,
            timestamp: self.ctx.provenance.timestamp,
        }
    }
}

/// The drivers of a full round, in the order they run.
pub fn default_drivers() -> Vec<Box<dyn SynthesisDriver>> {
    vec![
        Box::new(LoggableDriver),
        Box::new(CopyDriver),
        Box::new(NiceStringDriver),
    ]
}

/// Run every driver once over `model`.
///
/// The provenance timestamp is taken once, when the round starts, unless the
/// config fixes it.
pub fn run_round(
    model: &dyn DeclarationModel,
    config: &SynthesisConfig,
    diagnostics: &mut dyn Diagnostics,
    emitter: &mut dyn Emitter,
) -> SynthesisResult<RoundReport> {
    config.validate()?;
    let provenance = config.provenance(Utc::now());
    let mut round = Round::new(
        SynthesisContext::new(model, config, provenance),
        diagnostics,
        emitter,
    );
    for driver in default_drivers() {
        debug!("Running {} driver", driver.directive());
        driver.run(&mut round)?;
    }
    let report = round.finish();
    info!(
        "Round finished: {} unit(s), {} error(s), {} warning(s)",
        report.units.len(),
        report.errors,
        report.warnings
    );
    Ok(report)
}

/// Shared loop of the extension-function drivers.
fn run_extension_driver(
    round: &mut Round<'_>,
    directive: Directive,
    file_identifier: &str,
    generate: fn(&TypeDeclaration, &SynthesisContext<'_>) -> Result<Synthesized<FunSpec>, EligibilityError>,
) -> SynthesisResult<()> {
    let mut assembler = ExtensionUnitAssembler::new(file_identifier);
    for decl in round.marked(directive) {
        let symbol = decl.qualified_name.as_str();
        debug!("@{directive}: processing {symbol}");
        match generate(decl, round.context()) {
            Ok(synthesized) => {
                let function = round.accept(symbol, synthesized);
                assembler.add(decl.namespace(), function);
            }
            Err(error) => round.report(symbol, &error),
        }
    }
    let provenance = round.context().provenance.clone();
    for unit in assembler.finish(&provenance) {
        round.submit(unit)?;
    }
    Ok(())
}

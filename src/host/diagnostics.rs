use strum::Display;

/// Sink for user-visible diagnostics. Reporting never aborts the round.
pub trait Diagnostics {
    fn report_error(&mut self, symbol: &str, message: &str);
    fn report_warning(&mut self, symbol: &str, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub symbol: String,
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}: {}", self.severity, self.symbol, self.message)
    }
}

/// Collects diagnostics for later inspection and mirrors them to `log`.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticLog {
    entries: Vec<Diagnostic>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(|entry| entry.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(|entry| entry.severity == Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    fn push(&mut self, severity: Severity, symbol: &str, message: &str) {
        self.entries.push(Diagnostic {
            severity,
            symbol: symbol.to_string(),
            message: message.to_string(),
        });
    }
}

impl Diagnostics for DiagnosticLog {
    fn report_error(&mut self, symbol: &str, message: &str) {
        log::error!("{symbol}: {message}");
        self.push(Severity::Error, symbol, message);
    }

    fn report_warning(&mut self, symbol: &str, message: &str) {
        log::warn!("{symbol}: {message}");
        self.push(Severity::Warning, symbol, message);
    }
}

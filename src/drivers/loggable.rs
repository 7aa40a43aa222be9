use std::collections::HashMap;

use log::debug;

use super::{Round, SynthesisDriver};
use crate::error::{EligibilityError, SynthesisResult};
use crate::generators::logging::generate_logger;
use crate::generators::naming::logger_impl_name;
use crate::markers::Directive;
use crate::unit::GeneratedUnit;

/// Emits one `<Name>LoggerImpl` unit per eligible `@Loggable` declaration.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggableDriver;

impl SynthesisDriver for LoggableDriver {
    fn directive(&self) -> Directive {
        Directive::Loggable
    }

    fn run(&self, round: &mut Round<'_>) -> SynthesisResult<()> {
        // (namespace, wrapper name) -> declaration that claimed it
        let mut claimed: HashMap<(String, String), String> = HashMap::new();

        for decl in round.marked(Directive::Loggable) {
            let symbol = decl.qualified_name.as_str();
            debug!("@Loggable: processing {symbol}");

            let key = (decl.namespace().to_string(), logger_impl_name(decl));
            if let Some(first) = claimed.get(&key) {
                let error = EligibilityError::GeneratedNameClash {
                    name: symbol.to_string(),
                    file: format!("{}.{}", key.0, key.1),
                    first: first.clone(),
                };
                round.report(symbol, &error);
                continue;
            }

            let class = match generate_logger(decl, round.context()) {
                Ok(synthesized) => round.accept(symbol, synthesized),
                Err(error) => {
                    round.report(symbol, &error);
                    continue;
                }
            };
            claimed.insert(key, symbol.to_string());

            let file_identifier = class.name.clone();
            let provenance = round.context().provenance.clone();
            if let Some(unit) =
                GeneratedUnit::new(decl.namespace(), file_identifier, vec![class.into()], &provenance)
            {
                round.submit(unit)?;
            }
        }
        Ok(())
    }
}

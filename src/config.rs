//! Synthesis configuration.
//!
//! One [`SynthesisConfig`] drives a whole round. Build it with
//! `typed-builder`, or load it from TOML where every key is optional.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use declsynth_syntax::Indent;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::error::ConfigError;
use crate::markers::{MarkerSet, Provenance};

pub const DEFAULT_GENERATOR: &str = "io.declsynth";
pub const DEFAULT_ORIGIN_COMMENT: &str = "Generated by declsynth, do not edit";
pub const DEFAULT_MARKER_NAMESPACE: &str = "io.declsynth.annotations";
pub const DEFAULT_PROVENANCE_ANNOTATION: &str = "javax.annotation.processing.Generated";
pub const DEFAULT_LOG_FUNCTION: &str = "println";

/// Configuration for one synthesis round.
///
/// # Examples
///
/// ```
/// use declsynth::config::SynthesisConfig;
///
/// // Defaults
/// let config = SynthesisConfig::default();
/// assert_eq!(config.log_function, "println");
///
/// // Customize options
/// let config = SynthesisConfig::builder()
///     .log_function("Log.d")
///     .indent_width(2)
///     .build();
/// assert_eq!(config.indent_width, 2);
/// ```
#[derive(Debug, Clone, PartialEq, TypedBuilder, Serialize, Deserialize)]
#[builder(doc)]
#[serde(default, deny_unknown_fields)]
pub struct SynthesisConfig {
    /// Generator identity written into every provenance annotation
    #[builder(default = DEFAULT_GENERATOR.to_string(), setter(into))]
    pub generator: String,

    /// Fixed comment written into every provenance annotation
    #[builder(default = DEFAULT_ORIGIN_COMMENT.to_string(), setter(into))]
    pub origin_comment: String,

    /// Namespace of the `Loggable`, `NoLog`, `Copy` and `ToNiceString` markers
    #[builder(default = DEFAULT_MARKER_NAMESPACE.to_string(), setter(into))]
    pub marker_namespace: String,

    /// Qualified name of the provenance annotation type
    #[builder(default = DEFAULT_PROVENANCE_ANNOTATION.to_string(), setter(into))]
    pub provenance_annotation: String,

    /// Function the logging wrappers call with each log line
    #[builder(default = DEFAULT_LOG_FUNCTION.to_string(), setter(into))]
    pub log_function: String,

    /// Fixed provenance timestamp; the round start time when absent
    #[builder(default, setter(strip_option))]
    pub timestamp: Option<DateTime<Utc>>,

    /// Spaces per indentation level in generated files
    #[builder(default = 4)]
    pub indent_width: usize,

    /// Extension of generated files, without the dot
    #[builder(default = "kt".to_string(), setter(into))]
    pub file_extension: String,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl SynthesisConfig {
    /// Parse from a TOML string and validate.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.generator.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "generator",
                message: "must not be blank".to_string(),
            });
        }
        if !is_dotted_identifier(&self.provenance_annotation) {
            return Err(ConfigError::Invalid {
                field: "provenance_annotation",
                message: format!("`{}` is not a qualified name", self.provenance_annotation),
            });
        }
        if !self.marker_namespace.is_empty() && !is_dotted_identifier(&self.marker_namespace) {
            return Err(ConfigError::Invalid {
                field: "marker_namespace",
                message: format!("`{}` is not a namespace", self.marker_namespace),
            });
        }
        if !is_dotted_identifier(&self.log_function) {
            return Err(ConfigError::Invalid {
                field: "log_function",
                message: format!("`{}` is not a function name", self.log_function),
            });
        }
        if self.indent_width == 0 {
            return Err(ConfigError::Invalid {
                field: "indent_width",
                message: "must be at least 1".to_string(),
            });
        }
        if self.file_extension.is_empty() || self.file_extension.contains(['.', '/', '\\']) {
            return Err(ConfigError::Invalid {
                field: "file_extension",
                message: format!("`{}` is not a bare extension", self.file_extension),
            });
        }
        Ok(())
    }

    pub fn markers(&self) -> MarkerSet {
        MarkerSet::new(self.marker_namespace.clone())
    }

    pub fn indent(&self) -> Indent {
        Indent::spaces(self.indent_width)
    }

    /// Provenance for a round started at `round_start`, unless a fixed
    /// timestamp is configured.
    pub fn provenance(&self, round_start: DateTime<Utc>) -> Provenance {
        Provenance {
            generator: self.generator.clone(),
            timestamp: self.timestamp.unwrap_or(round_start),
            comment: self.origin_comment.clone(),
            annotation_type: self.provenance_annotation.clone(),
        }
    }
}

fn is_dotted_identifier(text: &str) -> bool {
    !text.is_empty()
        && text.split('.').all(|segment| {
            let mut chars = segment.chars();
            chars
                .next()
                .is_some_and(|first| first == '_' || first.is_alphabetic())
                && chars.all(|c| c == '_' || c.is_alphanumeric())
        })
}

use chrono::{DateTime, SecondsFormat, Utc};
use declsynth_syntax::{AnnotationSpec, AnnotationValue};

/// Who generated a unit and when. Captured once per round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    pub generator: String,
    pub timestamp: DateTime<Utc>,
    pub comment: String,
    /// Qualified name of the annotation type.
    pub annotation_type: String,
}

impl Provenance {
    pub fn date(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// `@Generated(value = ["<generator>"], date = "<ISO-8601>", comments = "<comment>")`
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use declsynth::markers::{Provenance, build_provenance_annotation};
/// use declsynth_syntax::Renderable;
///
/// let provenance = Provenance {
///     generator: "io.declsynth".to_string(),
///     timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
///     comment: "Generated by declsynth".to_string(),
///     annotation_type: "Generated".to_string(),
/// };
/// assert_eq!(
///     build_provenance_annotation(&provenance).to_source(),
///     "@Generated(value = [\"io.declsynth\"], date = \"2024-05-01T12:00:00Z\", comments = \"Generated by declsynth\")\n"
/// );
/// ```
pub fn build_provenance_annotation(provenance: &Provenance) -> AnnotationSpec {
    AnnotationSpec::new(provenance.annotation_type.clone())
        .argument(
            "value",
            AnnotationValue::Array(vec![AnnotationValue::Str(provenance.generator.clone())]),
        )
        .argument("date", AnnotationValue::Str(provenance.date()))
        .argument("comments", AnnotationValue::Str(provenance.comment.clone()))
}

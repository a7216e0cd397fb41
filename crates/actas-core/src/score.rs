//! Numeric coercion and resit-score resolution
//!
//! Score text is locale-formatted: comma as decimal separator, attendance
//! with a trailing percent sign. Anything unparseable coerces to 0.0 rather
//! than erroring; a garbled score then fails the component minimum on its
//! own, without a reported error.

use crate::roster::StudentRecord;

/// Coerce optional locale-formatted text to a number.
///
/// Blank (after trimming), absent, and unparseable values all read as 0.0.
/// Percent signs are the caller's job, not stripped here.
pub fn coerce(value: Option<&str>) -> f64 {
    let Some(raw) = value else {
        return 0.0;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.replace(',', ".").parse().unwrap_or(0.0)
}

/// Resolve one graded component: a present, non-blank resit score replaces
/// the original in all downstream calculations.
pub fn resolve(original: Option<&str>, resit: Option<&str>) -> f64 {
    match resit {
        Some(r) if !r.trim().is_empty() => coerce(Some(r)),
        _ => coerce(original),
    }
}

/// The three resolved component scores: partial 1, partial 2, practicals.
pub fn resolved_scores(record: &StudentRecord) -> (f64, f64, f64) {
    (
        resolve(record.parcial1.as_deref(), record.ordinario1.as_deref()),
        resolve(record.parcial2.as_deref(), record.ordinario2.as_deref()),
        resolve(
            record.practicas.as_deref(),
            record.ordinario_practicas.as_deref(),
        ),
    )
}

/// Attendance as a percentage, with the trailing `%` stripped before coercion.
pub fn attendance(record: &StudentRecord) -> f64 {
    coerce(
        record
            .asistencia
            .as_deref()
            .map(|s| s.trim().trim_end_matches('%')),
    )
}

//! Weighted final-grade aggregation
//!
//! `final = 0.3*parcial1 + 0.3*parcial2 + 0.4*practicas`, rendered as
//! decimal text with at most two fractional digits.

use crate::roster::{EnrichedRecord, StudentRecord};
use crate::score;

const WEIGHT_PARCIAL: f64 = 0.3;
const WEIGHT_PRACTICAS: f64 = 0.4;

/// Combine the three resolved component scores into the final grade.
pub fn final_grade(parcial1: f64, parcial2: f64, practicas: f64) -> f64 {
    WEIGHT_PARCIAL * parcial1 + WEIGHT_PARCIAL * parcial2 + WEIGHT_PRACTICAS * practicas
}

/// Format a grade with at most two fractional digits: `7.5`, `8`, `6.33`.
///
/// Rounds half-up to two decimals, then trims trailing zeros and a bare
/// trailing dot.
pub fn format_grade(grade: f64) -> String {
    let rounded = (grade * 100.0).round() / 100.0;
    let mut text = format!("{rounded:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

/// Attach the formatted final grade to a record.
///
/// Resit overrides are applied via score resolution; the original fields
/// are carried through unchanged.
pub fn enrich(record: StudentRecord) -> EnrichedRecord {
    let (p1, p2, prac) = score::resolved_scores(&record);
    let nota_final = format_grade(final_grade(p1, p2, prac));
    EnrichedRecord { record, nota_final }
}

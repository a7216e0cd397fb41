//! Pass/fail eligibility partition
//!
//! A student passes only when attendance, every component minimum, and the
//! final-grade threshold are all met. A single miss routes to failing.

use crate::roster::EnrichedRecord;
use crate::score;

const MIN_ATTENDANCE: f64 = 75.0;
const MIN_COMPONENT: f64 = 4.0;
const MIN_FINAL: f64 = 5.0;

/// Per-record eligibility check. Component scores are recomputed via score
/// resolution; the final grade is read back from the `nota_final` text.
pub fn passes(record: &EnrichedRecord) -> bool {
    let (p1, p2, prac) = score::resolved_scores(&record.record);
    let nota = score::coerce(Some(record.nota_final.as_str()));

    score::attendance(&record.record) >= MIN_ATTENDANCE
        && p1 >= MIN_COMPONENT
        && p2 >= MIN_COMPONENT
        && prac >= MIN_COMPONENT
        && nota >= MIN_FINAL
}

/// Stable split into (passing, failing); relative order is preserved in
/// both halves.
pub fn partition(records: Vec<EnrichedRecord>) -> (Vec<EnrichedRecord>, Vec<EnrichedRecord>) {
    records.into_iter().partition(passes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::StudentRecord;

    fn student(p1: &str, p2: &str, prac: &str, asistencia: &str, nota: &str) -> EnrichedRecord {
        EnrichedRecord {
            record: StudentRecord {
                parcial1: Some(p1.into()),
                parcial2: Some(p2.into()),
                practicas: Some(prac.into()),
                asistencia: Some(asistencia.into()),
                ..Default::default()
            },
            nota_final: nota.into(),
        }
    }

    #[test]
    fn test_boundary_student_passes() {
        assert!(passes(&student("4", "4", "4", "75%", "5")));
    }

    #[test]
    fn test_any_single_miss_fails() {
        assert!(!passes(&student("4", "4", "4", "74,9%", "5")));
        assert!(!passes(&student("3,9", "4", "4", "75%", "5")));
        assert!(!passes(&student("4", "3,9", "4", "75%", "5")));
        assert!(!passes(&student("4", "4", "3,9", "75%", "5")));
        assert!(!passes(&student("4", "4", "4", "75%", "4.99")));
    }

    #[test]
    fn test_resit_can_rescue_component() {
        let mut rescued = student("2", "6", "6", "90%", "5.4");
        rescued.record.ordinario1 = Some("6".into());
        assert!(passes(&rescued));
    }

    #[test]
    fn test_partition_exhaustive_disjoint_stable() {
        let records = vec![
            student("4", "4", "4", "75%", "5"),
            student("1", "1", "1", "10%", "1"),
            student("8", "8", "8", "100%", "8"),
            student("8", "8", "8", "50%", "8"),
        ];
        let total = records.len();
        let (passing, failing) = partition(records);

        assert_eq!(passing.len() + failing.len(), total);
        assert_eq!(passing.len(), 2);
        // Input order survives within each half
        assert_eq!(passing[0].nota_final, "5");
        assert_eq!(passing[1].nota_final, "8");
        assert_eq!(failing[0].nota_final, "1");
        assert_eq!(failing[1].nota_final, "8");
    }
}

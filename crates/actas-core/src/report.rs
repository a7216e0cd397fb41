//! Two-section report rendering
//!
//! Output is plain text: an `Aprobados:` section, one blank line, then a
//! `Suspensos:` section, each listing students in partition order.

use crate::roster::EnrichedRecord;

/// Render the classified roster as the final report text.
pub fn render(passing: &[EnrichedRecord], failing: &[EnrichedRecord]) -> String {
    let mut out = String::new();

    out.push_str("Aprobados:\n");
    for student in passing {
        push_line(&mut out, student);
    }

    out.push('\n');

    out.push_str("Suspensos:\n");
    for student in failing {
        push_line(&mut out, student);
    }

    out
}

fn push_line(out: &mut String, student: &EnrichedRecord) {
    out.push_str(&format!(
        "{}, {} - Nota Final: {}\n",
        student.record.apellidos, student.record.nombre, student.nota_final
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::StudentRecord;

    fn student(apellidos: &str, nombre: &str, nota: &str) -> EnrichedRecord {
        EnrichedRecord {
            record: StudentRecord {
                apellidos: apellidos.into(),
                nombre: nombre.into(),
                ..Default::default()
            },
            nota_final: nota.into(),
        }
    }

    #[test]
    fn test_render_both_sections() {
        let passing = vec![student("Diaz", "Ana", "5"), student("Gil", "Luis", "7.25")];
        let failing = vec![student("Vega", "Mar", "3.1")];

        let text = render(&passing, &failing);
        assert_eq!(
            text,
            "Aprobados:\n\
             Diaz, Ana - Nota Final: 5\n\
             Gil, Luis - Nota Final: 7.25\n\
             \n\
             Suspensos:\n\
             Vega, Mar - Nota Final: 3.1\n"
        );
    }

    #[test]
    fn test_render_empty_roster() {
        assert_eq!(render(&[], &[]), "Aprobados:\n\nSuspensos:\n");
    }
}

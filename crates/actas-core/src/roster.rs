//! Roster input model and parsing
//!
//! The roster is semicolon-separated text: a header line naming the columns,
//! then one row per student mapped positionally onto the header. Rows are
//! never rejected; a missing trailing cell reads the same as a blank one.

use serde::Serialize;

/// Raw per-student row, one field per known roster column.
///
/// Score fields keep their raw locale text (comma decimal separator,
/// attendance with a trailing `%`); coercion to numbers happens at the
/// point of use. A `None` covers both an absent column and a blank cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StudentRecord {
    pub apellidos: String,
    pub nombre: String,
    pub parcial1: Option<String>,
    pub parcial2: Option<String>,
    pub practicas: Option<String>,
    /// Resit override for `parcial1`
    pub ordinario1: Option<String>,
    /// Resit override for `parcial2`
    pub ordinario2: Option<String>,
    /// Resit override for `practicas`
    pub ordinario_practicas: Option<String>,
    pub asistencia: Option<String>,
}

/// A student record with the derived final grade attached.
///
/// The underlying record is carried through unchanged; enrichment never
/// mutates in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedRecord {
    #[serde(flatten)]
    pub record: StudentRecord,
    /// Final grade as decimal text, at most two fractional digits
    pub nota_final: String,
}

/// Parse a full roster: header line plus student rows, sorted by surname.
///
/// The sort is ascending and byte-wise; it is stable, so students sharing a
/// surname keep their input order. An empty input yields an empty roster.
pub fn parse_roster(text: &str) -> Vec<StudentRecord> {
    let mut lines = text.lines();
    let Some(header) = lines.next() else {
        return Vec::new();
    };
    let columns: Vec<&str> = header.split(';').map(str::trim).collect();

    let mut records: Vec<StudentRecord> = lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| record_from_row(&columns, line))
        .collect();
    records.sort_by(|a, b| a.apellidos.cmp(&b.apellidos));
    tracing::debug!(students = records.len(), "roster_sorted");
    records
}

fn record_from_row(columns: &[&str], line: &str) -> StudentRecord {
    let cells: Vec<&str> = line.split(';').collect();
    let mut record = StudentRecord::default();

    for (i, name) in columns.iter().enumerate() {
        let cell = cells.get(i).copied().unwrap_or("");
        match *name {
            "Apellidos" => record.apellidos = cell.to_string(),
            "Nombre" => record.nombre = cell.to_string(),
            "Parcial1" => record.parcial1 = non_blank(cell),
            "Parcial2" => record.parcial2 = non_blank(cell),
            "Practicas" => record.practicas = non_blank(cell),
            "Ordinario1" => record.ordinario1 = non_blank(cell),
            "Ordinario2" => record.ordinario2 = non_blank(cell),
            "OrdinarioPracticas" => record.ordinario_practicas = non_blank(cell),
            "Asistencia" => record.asistencia = non_blank(cell),
            // Unknown columns are carried by the file, not by us
            _ => {}
        }
    }

    record
}

fn non_blank(cell: &str) -> Option<String> {
    if cell.trim().is_empty() {
        None
    } else {
        Some(cell.to_string())
    }
}

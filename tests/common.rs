use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn actas() -> Command {
    cargo_bin_cmd!("actas")
}

pub const HEADER: &str =
    "Apellidos;Nombre;Parcial1;Parcial2;Practicas;Ordinario1;Ordinario2;OrdinarioPracticas;Asistencia";

/// Write a roster file (header plus the given rows) into `dir`.
#[allow(dead_code)]
pub fn write_roster(dir: &Path, rows: &[&str]) -> PathBuf {
    let path = dir.join("notas.csv");
    let mut text = String::from(HEADER);
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    text.push('\n');
    fs::write(&path, text).expect("Failed to write roster");
    path
}

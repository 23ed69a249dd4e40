use crate::core::models::grid::{CalibrationBin, CalibrationTable, GridError};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// One row of a calibration CSV file.
#[derive(Debug, Deserialize, Clone)]
pub struct CalibrationRow {
    pub energy_kev: f64,
    pub mass_attenuation: f64,
    pub shield_leakage_rate: f64,
    pub spallation_counts: f64,
}

impl From<CalibrationRow> for CalibrationBin {
    fn from(row: CalibrationRow) -> Self {
        Self {
            energy_kev: row.energy_kev,
            mass_attenuation: row.mass_attenuation,
            shield_leakage_rate: row.shield_leakage_rate,
            spallation_counts: row.spallation_counts,
        }
    }
}

/// Reads a calibration table from a headered CSV file.
///
/// Rows are accepted in file order and must satisfy the table invariants
/// (strictly increasing positive energies, non-negative coefficients).
pub fn load_calibration(path: &Path) -> Result<CalibrationTable, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    let mut reader = csv::Reader::from_reader(content.as_bytes());

    let mut bins = Vec::new();
    for result in reader.deserialize::<CalibrationRow>() {
        let row = result.map_err(|e| LoadError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        bins.push(row.into());
    }

    Ok(CalibrationTable::new(bins)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn load_calibration_succeeds_with_valid_csv() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("calibration.csv");
        let mut file = File::create(&file_path).unwrap();
        writeln!(
            file,
            "energy_kev,mass_attenuation,shield_leakage_rate,spallation_counts"
        )
        .unwrap();
        writeln!(file, "15.0,91.48,0.91,1.82").unwrap();
        writeln!(file, "20.0,42.22,0.91,1.82").unwrap();
        writeln!(file, "30.0,13.95,0.91,1.82").unwrap();

        let table = load_calibration(&file_path).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.bins()[0].energy_kev, 15.0);
        assert_eq!(table.bins()[1].mass_attenuation, 42.22);
        assert_eq!(table.bins()[2].spallation_counts, 1.82);
    }

    #[test]
    fn load_calibration_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("nonexistent.csv");

        let result = load_calibration(&file_path);

        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn load_calibration_fails_for_malformed_row() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("calibration.csv");
        let mut file = File::create(&file_path).unwrap();
        writeln!(
            file,
            "energy_kev,mass_attenuation,shield_leakage_rate,spallation_counts"
        )
        .unwrap();
        writeln!(file, "15.0,not_a_number,0.91,1.82").unwrap();

        let result = load_calibration(&file_path);

        assert!(matches!(result, Err(LoadError::Csv { .. })));
    }

    #[test]
    fn load_calibration_fails_for_unordered_energies() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("calibration.csv");
        let mut file = File::create(&file_path).unwrap();
        writeln!(
            file,
            "energy_kev,mass_attenuation,shield_leakage_rate,spallation_counts"
        )
        .unwrap();
        writeln!(file, "20.0,42.22,0.91,1.82").unwrap();
        writeln!(file, "15.0,91.48,0.91,1.82").unwrap();

        let result = load_calibration(&file_path);

        assert!(matches!(
            result,
            Err(LoadError::Grid(GridError::InvalidParameter {
                name: "energy_kev",
                ..
            }))
        ));
    }

    #[test]
    fn load_calibration_fails_for_empty_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("calibration.csv");
        let mut file = File::create(&file_path).unwrap();
        writeln!(
            file,
            "energy_kev,mass_attenuation,shield_leakage_rate,spallation_counts"
        )
        .unwrap();

        let result = load_calibration(&file_path);

        assert!(matches!(
            result,
            Err(LoadError::Grid(GridError::EmptyTable))
        ));
    }

    #[test]
    fn error_message_includes_path() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("missing.csv");

        let err = load_calibration(&file_path).unwrap_err();

        assert!(err.to_string().contains("missing.csv"));
    }
}

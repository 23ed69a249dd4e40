use crate::error::{CliError, Result};
use gammasens::workflows::survey::MissionCurves;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// One output row: the energy bin plus every curve derived for it.
#[derive(Debug, Serialize)]
pub struct CurveRow {
    pub energy_kev: f64,
    pub efficiency: f64,
    pub cosmic_diffuse: f64,
    pub shield_leakage: f64,
    pub spallation: f64,
    pub total_background: f64,
    pub minimum_flux: f64,
}

pub fn write_curves(path: &Path, curves: &MissionCurves) -> Result<()> {
    debug!("Writing {} curve rows to {:?}", curves.energies.len(), path);
    let to_write_error = |e: csv::Error| {
        CliError::Other(anyhow::anyhow!(
            "Failed to write curves to '{}': {}",
            path.display(),
            e
        ))
    };

    let mut writer = csv::Writer::from_path(path).map_err(to_write_error)?;
    for i in 0..curves.energies.len() {
        writer
            .serialize(CurveRow {
                energy_kev: curves.energies[i],
                efficiency: curves.background.efficiency[i],
                cosmic_diffuse: curves.background.cosmic_diffuse[i],
                shield_leakage: curves.background.shield_leakage[i],
                spallation: curves.background.spallation[i],
                total_background: curves.background.total[i],
                minimum_flux: curves.sensitivity.minimum_flux[i],
            })
            .map_err(to_write_error)?;
    }
    writer.flush()?;

    Ok(())
}

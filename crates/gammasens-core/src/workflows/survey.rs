use crate::core::models::grid::CalibrationTable;
use crate::engine::background::{BackgroundCurves, BackgroundModel};
use crate::engine::config::{BackgroundConfig, ExposureConfig};
use crate::engine::error::ModelError;
use crate::engine::sensitivity::{SensitivityCurve, SensitivityModel};
use nalgebra::DVector;
use tracing::{info, instrument};

/// Every curve derived from one mission evaluation, aligned on the shared
/// energy axis.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionCurves {
    pub energies: DVector<f64>,
    pub background: BackgroundCurves,
    pub sensitivity: SensitivityCurve,
}

/// Evaluates a complete mission: background components first, then the
/// minimum detectable flux curve derived from them.
#[instrument(skip_all, name = "survey_workflow")]
pub fn run(
    table: &CalibrationTable,
    background_config: &BackgroundConfig,
    exposure: &ExposureConfig,
) -> Result<MissionCurves, ModelError> {
    info!(
        material = %background_config.detector.material.name,
        bins = table.len(),
        "Starting mission evaluation"
    );

    let background = BackgroundModel::new(table, background_config).compute();
    info!("Background components computed.");

    let sensitivity = SensitivityModel::new(table, &background, exposure).compute()?;
    info!("Sensitivity curve computed.");

    Ok(MissionCurves {
        energies: table.energies(),
        background,
        sensitivity,
    })
}

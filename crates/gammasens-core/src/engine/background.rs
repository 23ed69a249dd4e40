use nalgebra::DVector;
use tracing::debug;

use super::config::BackgroundConfig;
use crate::core::models::grid::CalibrationTable;
use crate::core::physics;

/// The per-bin detection efficiency and background components derived from one
/// instrument configuration. Every vector is aligned with the calibration
/// table that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundCurves {
    pub efficiency: DVector<f64>,
    pub cosmic_diffuse: DVector<f64>,
    pub shield_leakage: DVector<f64>,
    pub spallation: DVector<f64>,
    pub total: DVector<f64>,
}

impl BackgroundCurves {
    pub fn len(&self) -> usize {
        self.total.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total.is_empty()
    }
}

/// Evaluates the background formulas across a calibration table for one
/// validated instrument configuration.
pub struct BackgroundModel<'a> {
    table: &'a CalibrationTable,
    config: &'a BackgroundConfig,
}

impl<'a> BackgroundModel<'a> {
    pub fn new(table: &'a CalibrationTable, config: &'a BackgroundConfig) -> Self {
        Self { table, config }
    }

    /// Computes all background curves. Infallible: the configuration and the
    /// table were validated at construction, and every formula is total over
    /// the accepted domain.
    pub fn compute(&self) -> BackgroundCurves {
        let detector = &self.config.detector;
        let correction = physics::mass_area_correction(
            detector.thickness_cm,
            detector.material.density_g_cm3,
            detector.area_cm2,
        );
        debug!(
            material = %detector.material.name,
            correction,
            bins = self.table.len(),
            "Evaluating background components"
        );

        let n = self.table.len();
        let mut efficiency = DVector::zeros(n);
        let mut cosmic_diffuse = DVector::zeros(n);
        let mut shield_leakage = DVector::zeros(n);
        let mut spallation = DVector::zeros(n);

        for (i, bin) in self.table.bins().iter().enumerate() {
            let eff = physics::absorption_efficiency(
                bin.mass_attenuation,
                detector.material.density_g_cm3,
                detector.thickness_cm,
            );
            efficiency[i] = eff;
            cosmic_diffuse[i] = physics::cosmic_diffuse_background(
                self.config.aperture.solid_angle_sr,
                eff,
                bin.energy_kev,
            );
            shield_leakage[i] = physics::shield_leakage_background(
                bin.shield_leakage_rate,
                self.config.shield.thickness_cm,
            );
            spallation[i] = physics::spallation_background(
                self.config.orbit.rigidity_factor,
                bin.spallation_counts,
                correction,
            );
        }

        let total = &cosmic_diffuse + &shield_leakage + &spallation;

        BackgroundCurves {
            efficiency,
            cosmic_diffuse,
            shield_leakage,
            spallation,
            total,
        }
    }
}

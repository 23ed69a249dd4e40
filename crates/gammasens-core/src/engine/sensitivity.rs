use nalgebra::DVector;
use tracing::debug;

use super::background::BackgroundCurves;
use super::config::ExposureConfig;
use super::error::ModelError;
use crate::core::models::grid::{CalibrationTable, GridError};
use crate::core::physics;

/// The minimum detectable flux per energy bin, aligned with the calibration
/// table it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct SensitivityCurve {
    pub minimum_flux: DVector<f64>,
}

impl SensitivityCurve {
    pub fn len(&self) -> usize {
        self.minimum_flux.len()
    }

    pub fn is_empty(&self) -> bool {
        self.minimum_flux.is_empty()
    }
}

/// Converts a background estimate into a minimum detectable flux curve for a
/// given observation.
pub struct SensitivityModel<'a> {
    table: &'a CalibrationTable,
    background: &'a BackgroundCurves,
    exposure: &'a ExposureConfig,
}

impl<'a> SensitivityModel<'a> {
    pub fn new(
        table: &'a CalibrationTable,
        background: &'a BackgroundCurves,
        exposure: &'a ExposureConfig,
    ) -> Self {
        Self {
            table,
            background,
            exposure,
        }
    }

    /// Computes the sensitivity curve.
    ///
    /// Fails if the background curves do not align with the table, if any bin
    /// carries a negative total background, or if the detection efficiency is
    /// zero anywhere (a blind bin has no finite minimum detectable flux).
    pub fn compute(&self) -> Result<SensitivityCurve, ModelError> {
        if self.background.len() != self.table.len() {
            return Err(ModelError::Grid(GridError::MisalignedInput {
                array: "background_curves",
                expected: self.table.len(),
                found: self.background.len(),
            }));
        }
        debug!(
            sigma = self.exposure.sigma,
            obstime_s = self.exposure.obstime_s,
            bins = self.table.len(),
            "Evaluating sensitivity curve"
        );

        let mut minimum_flux = DVector::zeros(self.table.len());
        for (i, bin) in self.table.bins().iter().enumerate() {
            let total = self.background.total[i];
            if total < 0.0 {
                return Err(ModelError::NegativeBackground {
                    bin: i,
                    value: total,
                });
            }
            let efficiency = self.background.efficiency[i];
            if !(efficiency > 0.0) {
                return Err(ModelError::UndefinedSensitivity {
                    bin: i,
                    energy_kev: bin.energy_kev,
                });
            }
            minimum_flux[i] = physics::minimum_detectable_flux(
                self.exposure.sigma,
                efficiency,
                total,
                self.exposure.area_cm2,
                self.exposure.obstime_s,
                bin.energy_kev,
            );
        }

        Ok(SensitivityCurve { minimum_flux })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::grid::CalibrationBin;
    use crate::core::models::material::Material;
    use crate::engine::background::BackgroundModel;
    use crate::engine::config::{BackgroundConfig, BackgroundConfigBuilder, ExposureConfigBuilder};

    const TOLERANCE: f64 = 1e-9;

    fn test_table() -> CalibrationTable {
        CalibrationTable::new(vec![
            CalibrationBin {
                energy_kev: 15.0,
                mass_attenuation: 91.48,
                shield_leakage_rate: 0.91,
                spallation_counts: 1.82,
            },
            CalibrationBin {
                energy_kev: 100.0,
                mass_attenuation: 0.47,
                shield_leakage_rate: 0.55,
                spallation_counts: 1.10,
            },
        ])
        .unwrap()
    }

    fn test_config() -> BackgroundConfig {
        BackgroundConfigBuilder::new()
            .material(Material::preset("CdTe").unwrap())
            .thickness_cm(0.2)
            .area_cm2(3466.88)
            .shield_thickness_cm(10.0)
            .solid_angle_sr(0.7)
            .rigidity_factor(1.3)
            .build()
            .unwrap()
    }

    fn test_exposure() -> ExposureConfig {
        ExposureConfigBuilder::new()
            .area_cm2(3466.88)
            .obstime_s(150_336.0)
            .build()
            .unwrap()
    }

    #[test]
    fn sensitivity_matches_the_scalar_formula_per_bin() {
        let table = test_table();
        let config = test_config();
        let exposure = test_exposure();
        let background = BackgroundModel::new(&table, &config).compute();
        let curve = SensitivityModel::new(&table, &background, &exposure)
            .compute()
            .unwrap();

        assert_eq!(curve.len(), table.len());
        for (i, bin) in table.bins().iter().enumerate() {
            let expected = physics::minimum_detectable_flux(
                exposure.sigma,
                background.efficiency[i],
                background.total[i],
                exposure.area_cm2,
                exposure.obstime_s,
                bin.energy_kev,
            );
            assert!((curve.minimum_flux[i] - expected).abs() < TOLERANCE);
            assert!(curve.minimum_flux[i].is_finite());
            assert!(curve.minimum_flux[i] > 0.0);
        }
    }

    #[test]
    fn higher_significance_demands_brighter_sources() {
        let table = test_table();
        let config = test_config();
        let background = BackgroundModel::new(&table, &config).compute();

        let three_sigma = ExposureConfigBuilder::new()
            .area_cm2(3466.88)
            .obstime_s(150_336.0)
            .sigma(3.0)
            .build()
            .unwrap();
        let five_sigma = ExposureConfigBuilder::new()
            .area_cm2(3466.88)
            .obstime_s(150_336.0)
            .sigma(5.0)
            .build()
            .unwrap();

        let loose = SensitivityModel::new(&table, &background, &three_sigma)
            .compute()
            .unwrap();
        let strict = SensitivityModel::new(&table, &background, &five_sigma)
            .compute()
            .unwrap();

        for i in 0..table.len() {
            assert!(strict.minimum_flux[i] > loose.minimum_flux[i]);
        }
    }

    #[test]
    fn fails_on_misaligned_background_curves() {
        let table = test_table();
        let config = test_config();
        let exposure = test_exposure();
        let background = BackgroundModel::new(&table, &config).compute();

        let short_table = CalibrationTable::new(vec![CalibrationBin {
            energy_kev: 15.0,
            mass_attenuation: 91.48,
            shield_leakage_rate: 0.91,
            spallation_counts: 1.82,
        }])
        .unwrap();

        let result = SensitivityModel::new(&short_table, &background, &exposure).compute();
        assert!(matches!(
            result,
            Err(ModelError::Grid(GridError::MisalignedInput {
                array: "background_curves",
                expected: 1,
                found: 2,
            }))
        ));
    }

    #[test]
    fn fails_on_blind_bin_with_zero_efficiency() {
        let table = CalibrationTable::new(vec![CalibrationBin {
            energy_kev: 15.0,
            mass_attenuation: 0.0,
            shield_leakage_rate: 0.91,
            spallation_counts: 1.82,
        }])
        .unwrap();
        let config = test_config();
        let exposure = test_exposure();
        let background = BackgroundModel::new(&table, &config).compute();

        let result = SensitivityModel::new(&table, &background, &exposure).compute();
        assert!(matches!(
            result,
            Err(ModelError::UndefinedSensitivity {
                bin: 0,
                energy_kev,
            }) if energy_kev == 15.0
        ));
    }

    #[test]
    fn fails_on_negative_total_background() {
        let table = test_table();
        let config = test_config();
        let exposure = test_exposure();
        let mut background = BackgroundModel::new(&table, &config).compute();
        background.total[1] = -0.25;

        let result = SensitivityModel::new(&table, &background, &exposure).compute();
        assert!(matches!(
            result,
            Err(ModelError::NegativeBackground { bin: 1, value }) if value == -0.25
        ));
    }
}

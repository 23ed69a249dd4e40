use nalgebra::DVector;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("Per-bin column '{array}' has length {found}, expected {expected}")]
    MisalignedInput {
        array: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Invalid parameter '{name}' = {value} at bin {bin}: must be {constraint}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        bin: usize,
        constraint: &'static str,
    },

    #[error("Calibration table has no energy bins")]
    EmptyTable,
}

/// All tabulated inputs for one energy bin. Index `i` of the table refers to
/// the same bin in every derived per-bin quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationBin {
    /// Bin energy in keV. Strictly increasing across the table.
    pub energy_kev: f64,
    /// Mass attenuation coefficient of the detector material, in cm²/g.
    pub mass_attenuation: f64,
    /// Leakage count rate measured behind the reference 5 cm shield.
    pub shield_leakage_rate: f64,
    /// Spallation count rate of the reference instrument.
    pub spallation_counts: f64,
}

/// A validated, energy-ordered sequence of calibration bins.
///
/// Construction is the single point where the positional-alignment invariant
/// is enforced; afterwards misaligned per-bin inputs cannot exist.
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationTable {
    bins: Vec<CalibrationBin>,
}

impl CalibrationTable {
    pub fn new(bins: Vec<CalibrationBin>) -> Result<Self, GridError> {
        if bins.is_empty() {
            return Err(GridError::EmptyTable);
        }

        let mut previous_energy = 0.0;
        for (bin_index, bin) in bins.iter().enumerate() {
            if !(bin.energy_kev > 0.0) {
                return Err(GridError::InvalidParameter {
                    name: "energy_kev",
                    value: bin.energy_kev,
                    bin: bin_index,
                    constraint: "positive",
                });
            }
            if bin.energy_kev <= previous_energy {
                return Err(GridError::InvalidParameter {
                    name: "energy_kev",
                    value: bin.energy_kev,
                    bin: bin_index,
                    constraint: "strictly increasing",
                });
            }
            previous_energy = bin.energy_kev;

            if !(bin.mass_attenuation >= 0.0) {
                return Err(GridError::InvalidParameter {
                    name: "mass_attenuation",
                    value: bin.mass_attenuation,
                    bin: bin_index,
                    constraint: "non-negative",
                });
            }
            if !(bin.shield_leakage_rate >= 0.0) {
                return Err(GridError::InvalidParameter {
                    name: "shield_leakage_rate",
                    value: bin.shield_leakage_rate,
                    bin: bin_index,
                    constraint: "non-negative",
                });
            }
            if !(bin.spallation_counts >= 0.0) {
                return Err(GridError::InvalidParameter {
                    name: "spallation_counts",
                    value: bin.spallation_counts,
                    bin: bin_index,
                    constraint: "non-negative",
                });
            }
        }

        Ok(Self { bins })
    }

    /// Builds a table from the parallel columns a tabular collaborator
    /// supplies, rejecting length mismatches before zipping.
    pub fn from_columns(
        energies_kev: &[f64],
        mass_attenuations: &[f64],
        shield_leakage_rates: &[f64],
        spallation_counts: &[f64],
    ) -> Result<Self, GridError> {
        let expected = energies_kev.len();
        let check = |array: &'static str, found: usize| -> Result<(), GridError> {
            if found != expected {
                return Err(GridError::MisalignedInput {
                    array,
                    expected,
                    found,
                });
            }
            Ok(())
        };
        check("mass_attenuation", mass_attenuations.len())?;
        check("shield_leakage_rate", shield_leakage_rates.len())?;
        check("spallation_counts", spallation_counts.len())?;

        let bins = energies_kev
            .iter()
            .zip(mass_attenuations)
            .zip(shield_leakage_rates)
            .zip(spallation_counts)
            .map(
                |(((&energy_kev, &mass_attenuation), &shield_leakage_rate), &spallation_counts)| {
                    CalibrationBin {
                        energy_kev,
                        mass_attenuation,
                        shield_leakage_rate,
                        spallation_counts,
                    }
                },
            )
            .collect();

        Self::new(bins)
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn bins(&self) -> &[CalibrationBin] {
        &self.bins
    }

    /// The energy axis as a column vector, aligned with every derived curve.
    pub fn energies(&self) -> DVector<f64> {
        DVector::from_iterator(self.bins.len(), self.bins.iter().map(|bin| bin.energy_kev))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_bin(energy_kev: f64) -> CalibrationBin {
        CalibrationBin {
            energy_kev,
            mass_attenuation: 1.0,
            shield_leakage_rate: 0.9,
            spallation_counts: 1.8,
        }
    }

    #[test]
    fn accepts_increasing_positive_energies() {
        let table =
            CalibrationTable::new(vec![valid_bin(15.0), valid_bin(20.0), valid_bin(30.0)]).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.energies().as_slice(), &[15.0, 20.0, 30.0]);
    }

    #[test]
    fn rejects_empty_table() {
        let result = CalibrationTable::new(vec![]);
        assert_eq!(result, Err(GridError::EmptyTable));
    }

    #[test]
    fn rejects_non_positive_energy() {
        let result = CalibrationTable::new(vec![valid_bin(0.0)]);
        assert!(matches!(
            result,
            Err(GridError::InvalidParameter {
                name: "energy_kev",
                constraint: "positive",
                ..
            })
        ));
    }

    #[test]
    fn rejects_non_increasing_energies() {
        let result = CalibrationTable::new(vec![valid_bin(20.0), valid_bin(20.0)]);
        assert!(matches!(
            result,
            Err(GridError::InvalidParameter {
                name: "energy_kev",
                constraint: "strictly increasing",
                bin: 1,
                ..
            })
        ));
    }

    #[test]
    fn rejects_negative_mass_attenuation() {
        let mut bin = valid_bin(10.0);
        bin.mass_attenuation = -0.5;
        let result = CalibrationTable::new(vec![bin]);
        assert!(matches!(
            result,
            Err(GridError::InvalidParameter {
                name: "mass_attenuation",
                ..
            })
        ));
    }

    #[test]
    fn rejects_nan_reference_rate() {
        let mut bin = valid_bin(10.0);
        bin.shield_leakage_rate = f64::NAN;
        let result = CalibrationTable::new(vec![bin]);
        assert!(matches!(
            result,
            Err(GridError::InvalidParameter {
                name: "shield_leakage_rate",
                ..
            })
        ));
    }

    #[test]
    fn from_columns_zips_aligned_arrays() {
        let table = CalibrationTable::from_columns(
            &[15.0, 20.0],
            &[91.48, 42.22],
            &[0.91, 0.91],
            &[1.82, 1.82],
        )
        .unwrap();
        assert_eq!(table.bins()[1].mass_attenuation, 42.22);
    }

    #[test]
    fn from_columns_rejects_misaligned_arrays() {
        let result = CalibrationTable::from_columns(
            &[15.0, 20.0, 30.0, 40.0, 50.0],
            &[1.0, 1.0, 1.0, 1.0],
            &[0.9, 0.9, 0.9, 0.9, 0.9],
            &[1.8, 1.8, 1.8, 1.8, 1.8],
        );
        assert_eq!(
            result,
            Err(GridError::MisalignedInput {
                array: "mass_attenuation",
                expected: 5,
                found: 4,
            })
        );
    }

    #[test]
    fn reconstruction_from_identical_inputs_is_identical() {
        let bins = vec![valid_bin(15.0), valid_bin(20.0)];
        let first = CalibrationTable::new(bins.clone()).unwrap();
        let second = CalibrationTable::new(bins).unwrap();
        assert_eq!(first, second);
    }
}

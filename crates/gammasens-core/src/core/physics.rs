//! Closed-form background and sensitivity formulas.
//!
//! Every function here is a pure scalar formula over one energy bin; the engine
//! models drive them across a calibration table. The numeric constants are
//! calibration baselines from the reference instrument study and are not
//! configurable.

/// Normalization of the cosmic diffuse X-ray background power law,
/// in photons/(cm² s sr keV) at 1 keV.
pub const CDB_NORMALIZATION: f64 = 87.4;

/// Spectral index of the cosmic diffuse background power law.
pub const CDB_SPECTRAL_INDEX: f64 = 2.3;

/// Shield thickness at which the reference leakage rates were measured, in cm.
pub const REFERENCE_SHIELD_THICKNESS_CM: f64 = 5.0;

/// Density of the reference instrument's NaI detector, in g/cm³.
pub const REFERENCE_DETECTOR_DENSITY_G_CM3: f64 = 3.67;

/// Geometric area of the reference instrument's detector, in cm².
pub const REFERENCE_DETECTOR_AREA_CM2: f64 = 8800.0;

/// Probability that a photon is absorbed in a detector slab of the given
/// density (g/cm³) and thickness (cm), from its mass attenuation coefficient
/// (cm²/g). Bounded in [0, 1) for non-negative inputs.
#[inline]
pub fn absorption_efficiency(mass_attenuation: f64, density: f64, thickness: f64) -> f64 {
    1.0 - (-mass_attenuation * density * thickness).exp()
}

/// Cosmic diffuse background count rate through the aperture for one bin,
/// in counts/(cm² s keV): Ω · ε(E) · 87.4 · E^(−2.3).
#[inline]
pub fn cosmic_diffuse_background(solid_angle_sr: f64, efficiency: f64, energy_kev: f64) -> f64 {
    solid_angle_sr * efficiency * CDB_NORMALIZATION * energy_kev.powf(-CDB_SPECTRAL_INDEX)
}

/// Shield leakage count rate for one bin, scaling the reference rate by an
/// exponential correction normalized to the 5 cm calibration shield. A shield
/// of exactly the reference thickness leaves the rate unchanged.
#[inline]
pub fn shield_leakage_background(reference_rate: f64, shield_thickness_cm: f64) -> f64 {
    reference_rate * (1.0 - shield_thickness_cm / REFERENCE_SHIELD_THICKNESS_CM).exp()
}

/// Ratio of this detector's mass-area product to the reference instrument's.
#[inline]
pub fn mass_area_correction(thickness_cm: f64, density_g_cm3: f64, area_cm2: f64) -> f64 {
    thickness_cm * density_g_cm3 * area_cm2
        / (REFERENCE_DETECTOR_DENSITY_G_CM3 * REFERENCE_DETECTOR_AREA_CM2)
}

/// Neutron/spallation activation count rate for one bin: the reference count
/// scaled by the orbit's rigidity cutoff factor and the mass-area correction.
#[inline]
pub fn spallation_background(rigidity_factor: f64, reference_counts: f64, correction: f64) -> f64 {
    rigidity_factor * reference_counts * correction
}

/// Minimum detectable flux for one bin at the given significance, in
/// photons/(cm² s keV): (σ/ε) · sqrt(4·B / (A·T·E)).
#[inline]
pub fn minimum_detectable_flux(
    sigma: f64,
    efficiency: f64,
    background: f64,
    area_cm2: f64,
    obstime_s: f64,
    energy_kev: f64,
) -> f64 {
    (sigma / efficiency) * ((4.0 * background) / (area_cm2 * obstime_s * energy_kev)).sqrt()
}

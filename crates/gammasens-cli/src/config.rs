use crate::cli::RunArgs;
use crate::error::{CliError, Result};
use gammasens::core::models::material::Material;
use gammasens::engine::config as core_config;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialDetectorConfig {
    material: Option<String>,
    #[serde(rename = "density-g-cm3")]
    density_g_cm3: Option<f64>,
    #[serde(rename = "thickness-cm")]
    thickness_cm: Option<f64>,
    #[serde(rename = "area-cm2")]
    area_cm2: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialShieldConfig {
    #[serde(rename = "thickness-cm")]
    thickness_cm: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialApertureConfig {
    #[serde(rename = "solid-angle-sr")]
    solid_angle_sr: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOrbitConfig {
    #[serde(rename = "rigidity-factor")]
    rigidity_factor: Option<f64>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialExposureConfig {
    #[serde(rename = "obstime-s")]
    obstime_s: Option<f64>,
    sigma: Option<f64>,
    #[serde(rename = "area-cm2")]
    area_cm2: Option<f64>,
}

/// The raw, partially-specified mission description as read from a TOML file.
/// CLI overrides are merged in before the core builders validate the result.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialMissionConfig {
    pub name: Option<String>,
    detector: Option<PartialDetectorConfig>,
    shield: Option<PartialShieldConfig>,
    aperture: Option<PartialApertureConfig>,
    orbit: Option<PartialOrbitConfig>,
    exposure: Option<PartialExposureConfig>,
}

/// A fully merged and validated mission ready for evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionConfig {
    pub name: Option<String>,
    pub background: core_config::BackgroundConfig,
    pub exposure: core_config::ExposureConfig,
}

fn require<T>(value: Option<T>, key: &str) -> Result<T> {
    value.ok_or_else(|| {
        CliError::Config(format!(
            "A value for `{}` is required in the mission file.",
            key
        ))
    })
}

impl PartialMissionConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading mission description from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn merge_with_cli(mut self, args: &RunArgs) -> Result<MissionConfig> {
        let detector = self.detector.take().unwrap_or_default();
        let shield = self.shield.take().unwrap_or_default();
        let aperture = self.aperture.take().unwrap_or_default();
        let orbit = self.orbit.take().unwrap_or_default();
        let exposure = self.exposure.take().unwrap_or_default();

        let material_name = require(detector.material, "detector.material")?;
        let material = match detector.density_g_cm3 {
            Some(density) => Material::new(&material_name, density),
            None => Material::preset(&material_name).ok_or_else(|| {
                let known: Vec<_> = Material::presets()
                    .into_iter()
                    .map(|m| m.name)
                    .collect();
                CliError::Config(format!(
                    "Unknown detector material '{}'. Built-in materials are: {}. \
                     Provide `detector.density-g-cm3` to use a custom material.",
                    material_name,
                    known.join(", ")
                ))
            })?,
        };

        let detector_area_cm2 = require(detector.area_cm2, "detector.area-cm2")?;
        let shield_thickness_cm = require(
            args.shield_thickness.or(shield.thickness_cm),
            "shield.thickness-cm",
        )?;

        let background = core_config::BackgroundConfigBuilder::new()
            .material(material)
            .thickness_cm(require(detector.thickness_cm, "detector.thickness-cm")?)
            .area_cm2(detector_area_cm2)
            .shield_thickness_cm(shield_thickness_cm)
            .solid_angle_sr(require(aperture.solid_angle_sr, "aperture.solid-angle-sr")?)
            .rigidity_factor(require(orbit.rigidity_factor, "orbit.rigidity-factor")?)
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        let mut exposure_builder = core_config::ExposureConfigBuilder::new()
            .area_cm2(exposure.area_cm2.unwrap_or(detector_area_cm2))
            .obstime_s(require(
                args.obstime.or(exposure.obstime_s),
                "exposure.obstime-s",
            )?);
        if let Some(sigma) = args.sigma.or(exposure.sigma) {
            exposure_builder = exposure_builder.sigma(sigma);
        }
        let exposure = exposure_builder
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        Ok(MissionConfig {
            name: self.name,
            background,
            exposure,
        })
    }
}

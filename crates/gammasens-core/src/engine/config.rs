use crate::core::models::material::Material;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid parameter '{name}' = {value}: must be {constraint}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        constraint: &'static str,
    },
}

/// The absorbing detector plane: material, slab thickness, and geometric area.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorSpec {
    pub material: Material,
    pub thickness_cm: f64,
    pub area_cm2: f64,
}

/// The active shield surrounding the detector.
#[derive(Debug, Clone, PartialEq)]
pub struct ShieldSpec {
    pub thickness_cm: f64,
}

/// The aperture open to the cosmic diffuse X-ray background.
#[derive(Debug, Clone, PartialEq)]
pub struct ApertureSpec {
    pub solid_angle_sr: f64,
}

/// Orbit-dependent scaling of the cosmic-ray-induced activation background.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitSpec {
    pub rigidity_factor: f64,
}

/// A fully validated instrument description for background evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundConfig {
    pub detector: DetectorSpec,
    pub shield: ShieldSpec,
    pub aperture: ApertureSpec,
    pub orbit: OrbitSpec,
}

#[derive(Default)]
pub struct BackgroundConfigBuilder {
    material: Option<Material>,
    thickness_cm: Option<f64>,
    area_cm2: Option<f64>,
    shield_thickness_cm: Option<f64>,
    solid_angle_sr: Option<f64>,
    rigidity_factor: Option<f64>,
}

fn require_positive(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if !(value > 0.0) {
        return Err(ConfigError::InvalidParameter {
            name,
            value,
            constraint: "positive",
        });
    }
    Ok(value)
}

fn require_non_negative(name: &'static str, value: f64) -> Result<f64, ConfigError> {
    if !(value >= 0.0) {
        return Err(ConfigError::InvalidParameter {
            name,
            value,
            constraint: "non-negative",
        });
    }
    Ok(value)
}

impl BackgroundConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }
    pub fn thickness_cm(mut self, thickness: f64) -> Self {
        self.thickness_cm = Some(thickness);
        self
    }
    pub fn area_cm2(mut self, area: f64) -> Self {
        self.area_cm2 = Some(area);
        self
    }
    pub fn shield_thickness_cm(mut self, thickness: f64) -> Self {
        self.shield_thickness_cm = Some(thickness);
        self
    }
    pub fn solid_angle_sr(mut self, solid_angle: f64) -> Self {
        self.solid_angle_sr = Some(solid_angle);
        self
    }
    pub fn rigidity_factor(mut self, factor: f64) -> Self {
        self.rigidity_factor = Some(factor);
        self
    }

    pub fn build(self) -> Result<BackgroundConfig, ConfigError> {
        let material = self
            .material
            .ok_or(ConfigError::MissingParameter("material"))?;
        require_positive("material.density_g_cm3", material.density_g_cm3)?;

        let detector = DetectorSpec {
            material,
            thickness_cm: require_positive(
                "thickness_cm",
                self.thickness_cm
                    .ok_or(ConfigError::MissingParameter("thickness_cm"))?,
            )?,
            area_cm2: require_positive(
                "area_cm2",
                self.area_cm2
                    .ok_or(ConfigError::MissingParameter("area_cm2"))?,
            )?,
        };
        let shield = ShieldSpec {
            thickness_cm: require_positive(
                "shield_thickness_cm",
                self.shield_thickness_cm
                    .ok_or(ConfigError::MissingParameter("shield_thickness_cm"))?,
            )?,
        };
        let aperture = ApertureSpec {
            solid_angle_sr: require_non_negative(
                "solid_angle_sr",
                self.solid_angle_sr
                    .ok_or(ConfigError::MissingParameter("solid_angle_sr"))?,
            )?,
        };
        let orbit = OrbitSpec {
            rigidity_factor: require_positive(
                "rigidity_factor",
                self.rigidity_factor
                    .ok_or(ConfigError::MissingParameter("rigidity_factor"))?,
            )?,
        };

        Ok(BackgroundConfig {
            detector,
            shield,
            aperture,
            orbit,
        })
    }
}

/// Observation parameters for converting a background estimate into a
/// minimum detectable flux.
#[derive(Debug, Clone, PartialEq)]
pub struct ExposureConfig {
    pub area_cm2: f64,
    pub obstime_s: f64,
    pub sigma: f64,
}

pub const DEFAULT_SIGMA: f64 = 3.0;

#[derive(Default)]
pub struct ExposureConfigBuilder {
    area_cm2: Option<f64>,
    obstime_s: Option<f64>,
    sigma: Option<f64>,
}

impl ExposureConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn area_cm2(mut self, area: f64) -> Self {
        self.area_cm2 = Some(area);
        self
    }
    pub fn obstime_s(mut self, obstime: f64) -> Self {
        self.obstime_s = Some(obstime);
        self
    }
    pub fn sigma(mut self, sigma: f64) -> Self {
        self.sigma = Some(sigma);
        self
    }

    pub fn build(self) -> Result<ExposureConfig, ConfigError> {
        Ok(ExposureConfig {
            area_cm2: require_positive(
                "area_cm2",
                self.area_cm2
                    .ok_or(ConfigError::MissingParameter("area_cm2"))?,
            )?,
            obstime_s: require_positive(
                "obstime_s",
                self.obstime_s
                    .ok_or(ConfigError::MissingParameter("obstime_s"))?,
            )?,
            sigma: require_positive("sigma", self.sigma.unwrap_or(DEFAULT_SIGMA))?,
        })
    }
}

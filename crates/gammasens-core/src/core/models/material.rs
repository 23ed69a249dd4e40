use phf::phf_map;

/// Densities of the detector materials considered in the reference study, in g/cm³.
static PRESET_DENSITIES: phf::Map<&'static str, f64> = phf_map! {
    "CdTe" => 5.85,
    "CsI" => 4.51,
    "CZT" => 5.76,
    "NaI" => 3.67,
    "Ge" => 5.32,
};

/// A detector absorber material: a display name plus its bulk density.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    pub density_g_cm3: f64,
}

impl Material {
    /// Creates a material with an explicit density. Validation of the density
    /// happens when the material enters a configuration builder.
    pub fn new(name: impl Into<String>, density_g_cm3: f64) -> Self {
        Self {
            name: name.into(),
            density_g_cm3,
        }
    }

    /// Looks up one of the built-in detector materials by name.
    pub fn preset(name: &str) -> Option<Self> {
        PRESET_DENSITIES
            .get(name)
            .map(|&density| Self::new(name, density))
    }

    /// All built-in materials, sorted by name.
    pub fn presets() -> Vec<Self> {
        let mut materials: Vec<Self> = PRESET_DENSITIES
            .entries()
            .map(|(&name, &density)| Self::new(name, density))
            .collect();
        materials.sort_by(|a, b| a.name.cmp(&b.name));
        materials
    }
}

use thiserror::Error;

use super::config::ConfigError;
use crate::core::models::grid::GridError;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(
        "Sensitivity undefined at bin {bin} ({energy_kev} keV): detection efficiency is zero"
    )]
    UndefinedSensitivity { bin: usize, energy_kev: f64 },

    #[error("Total background is negative at bin {bin}: {value}")]
    NegativeBackground { bin: usize, value: f64 },
}

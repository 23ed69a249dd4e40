//! # Core Module
//!
//! This module provides the fundamental building blocks for instrument sensitivity
//! modeling in gammasens, serving as the computational core of the library.
//!
//! ## Overview
//!
//! The core module implements the data structures, closed-form physics, and data
//! loading required to estimate the background count rate and minimum detectable
//! flux of a gamma-ray/X-ray instrument. Everything here is stateless: the models
//! are plain records, the physics functions are pure, and the loaders produce
//! fully validated values or fail immediately.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules:
//!
//! - **Instrument Representation** ([`models`]) - Detector materials and the
//!   energy-indexed calibration table shared by every per-bin quantity
//! - **Background & Sensitivity Physics** ([`physics`]) - The fixed closed-form
//!   formulas with their calibration constants
//! - **File I/O** ([`io`]) - Reading tabulated calibration data
//!
//! ## Scientific Foundation
//!
//! The formulas implemented here follow the classical background-limited
//! sensitivity treatment for shielded hard X-ray detectors: photoelectric
//! detection efficiency from mass attenuation, the cosmic diffuse X-ray
//! background power law through the aperture, shield leakage normalized to a
//! reference shield thickness, and cosmic-ray-induced neutron/spallation
//! activation scaled by the geomagnetic rigidity cutoff.

pub mod io;
pub mod models;
pub mod physics;

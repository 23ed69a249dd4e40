//! # Engine Module
//!
//! This module hosts the validated configuration layer and the two evaluation
//! models that turn a calibration table into background and sensitivity curves.
//!
//! ## Overview
//!
//! Everything the physics formulas need beyond the calibration table is
//! collected into configuration structs built through validating builders:
//! once a [`config::BackgroundConfig`] or [`config::ExposureConfig`] exists,
//! every scalar in it has already been range-checked. The evaluation models
//! then run without re-validating:
//!
//! - **[`background::BackgroundModel`]** derives the per-bin detection
//!   efficiency and the three background components (cosmic diffuse, shield
//!   leakage, spallation activation) plus their total.
//! - **[`sensitivity::SensitivityModel`]** converts a background estimate into
//!   a minimum detectable flux curve, failing with a typed error on any bin
//!   where the detector is blind.
//!
//! ## Error Handling
//!
//! The module defines [`error::ModelError`], the aggregate error type returned
//! by the evaluation models and the workflows built on top of them.

pub mod background;
pub mod config;
pub mod error;
pub mod sensitivity;

//! # gammasens Core Library
//!
//! A library for modeling the background-limited continuum sensitivity of hard X-ray
//! and gamma-ray instruments, given detector material properties, shielding geometry,
//! and the dominant orbital background sources.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear
//! separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`CalibrationTable`,
//!   `Material`), pure mathematical representations of the background and sensitivity
//!   physics (`physics`), and I/O utilities for calibration data.
//!
//! - **[`engine`]: The Logic Core.** This layer hosts the validated configuration
//!   builders and the two evaluation models: `BackgroundModel`, which derives the
//!   per-bin detection efficiency and the three background components, and
//!   `SensitivityModel`, which turns a background estimate into a minimum detectable
//!   flux curve.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer.
//!   It ties the `engine` and `core` together to evaluate a complete mission
//!   configuration in one call, returning all derived curves at once.

pub mod core;
pub mod engine;
pub mod workflows;

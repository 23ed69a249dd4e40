//! Provides input functionality for tabulated calibration data.
//!
//! Calibration tables arrive as CSV files with one row per energy bin. This
//! module reads them, reports I/O and parsing failures with the offending
//! path, and hands every accepted row to the table constructor, which
//! enforces the per-bin validation rules.

pub mod calibration;

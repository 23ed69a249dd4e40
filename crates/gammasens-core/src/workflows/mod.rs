//! # Workflows Module
//!
//! This module provides the high-level entry points that evaluate a complete
//! mission configuration in one call.
//!
//! ## Overview
//!
//! Workflows are the top-level API for users of gammasens. They tie the engine
//! and core layers together: given a validated calibration table and
//! configuration, a workflow runs the background model, feeds its output into
//! the sensitivity model, and returns every derived curve at once, aligned on
//! the shared energy axis.
//!
//! ## Architecture
//!
//! - **Survey Workflow** ([`survey`]) - Full background and sensitivity
//!   evaluation for one instrument and observation.

pub mod survey;

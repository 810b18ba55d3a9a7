//! # Workflows Module
//!
//! High-level entry points that turn events into calibrated jets.
//!
//! ## Overview
//!
//! A workflow binds the configured calibration capabilities once, then runs every jet
//! through the energy-scale chain and, for simulation, through generator-level matching,
//! resolution smearing and variation propagation. Results come back aligned with the
//! input jets and can be rendered into named output columns.
//!
//! ## Architecture
//!
//! - **Correction Workflow** ([`correct`]) - [`correct::JetCorrector`] corrects single
//!   jets, whole events, or batches of events with progress reporting.
//!
//! ## Key Capabilities
//!
//! - **Fail-fast binding** of every named capability before any event is processed
//! - **Order-preserving** per-event results, with jets evaluated in parallel when the
//!   `parallel` feature is enabled
//! - **Event-tagged errors** identifying the event and run that aborted a batch

pub mod correct;

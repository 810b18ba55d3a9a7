//! # Models Module
//!
//! Event-scoped data structures consumed and produced by the correction engine.
//!
//! - [`jet`] - Reconstructed jets as read from the event record and generator-level jets
//! - [`event`] - Per-event auxiliary scalars and the full event bundle
//! - [`result`] - Calibrated outputs and their systematic variations

pub mod event;
pub mod jet;
pub mod result;

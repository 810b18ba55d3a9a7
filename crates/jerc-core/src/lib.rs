//! # JERC Core Library
//!
//! Per-jet energy-scale correction and resolution smearing for reconstructed jets,
//! producing calibrated kinematics together with scale and resolution systematic
//! variations.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`RawJet`, `GenJet`, `JetResult`),
//!   the contract for the external lookup collaborator (`Correction`, `CorrectionSet`),
//!   the azimuth-optional evaluator adapter and kinematic helpers.
//!
//! - **[`engine`]: The Logic Core.** The correction chain, generator-level matching,
//!   the hybrid smearing policy and the propagation of systematic variations, together
//!   with configuration, error types and progress reporting.
//!
//! - **[`workflows`]: The Public API.** Ties `engine` and `core` together to correct a
//!   single event or a whole batch of events.
//!
//! The library never performs event I/O and never evaluates calibration tables itself;
//! both are supplied by the caller through the traits in [`core::corrections`].

pub mod core;
pub mod engine;
pub mod workflows;

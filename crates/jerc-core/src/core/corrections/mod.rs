//! # Corrections Module
//!
//! The boundary between the engine and the external calibration-lookup subsystem.
//!
//! ## Overview
//!
//! The engine never evaluates calibration tables on its own. Instead, callers hand it a
//! [`traits::CorrectionSet`] from which named [`traits::Correction`] capabilities are
//! resolved once, up front. Each capability maps a short tuple of scalar inputs to a
//! single factor.
//!
//! ## Key Components
//!
//! - [`traits`] - The lookup contract, its input values and error taxonomy
//! - [`function`] - Closure-backed capabilities with a fixed input count
//! - [`adapter`] - Discovers whether a capability expects the azimuth as an input
//! - [`keys`] - The named keys of one calibration epoch, loadable from TOML
//!
//! ## Usage
//!
//! ```ignore
//! use jerc::core::corrections::adapter::{AzimuthAdapter, AzimuthPolicy};
//!
//! let l2 = AzimuthAdapter::new(set.bind("L2Relative")?, AzimuthPolicy::Discover);
//! let factor = l2.evaluate(jet.eta, jet.phi, pt_l1)?;
//! ```

pub mod adapter;
pub mod function;
pub mod keys;
pub mod traits;

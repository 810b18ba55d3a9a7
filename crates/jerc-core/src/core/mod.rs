//! # Core Module
//!
//! Fundamental building blocks shared by the correction engine.
//!
//! ## Architecture
//!
//! - **Event Representation** ([`models`]) - Raw jets, generator-level jets, event context
//!   and the per-jet results handed back to the caller
//! - **Calibration Lookups** ([`corrections`]) - The contract for named correction
//!   capabilities, the azimuth-optional evaluator adapter and calibration key sets
//! - **Output Layout** ([`io`]) - Positional column naming for the event-record writer
//! - **Kinematics** ([`utils`]) - Azimuth wrapping and angular distances
//!
//! Nothing in this module holds state across events.

pub mod corrections;
pub mod io;
pub mod models;
pub mod utils;

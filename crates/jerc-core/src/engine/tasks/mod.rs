//! The per-jet stages of the correction algorithm.
//!
//! Each stage is a function of its explicit inputs and the bound capabilities; none of
//! them keeps state between jets or events. They run in the order
//! [`energy_scale`] → [`gen_matching`] → [`smearing`] → [`variations`], the last three
//! only for simulation.

pub mod energy_scale;
pub mod gen_matching;
pub mod smearing;
pub mod variations;

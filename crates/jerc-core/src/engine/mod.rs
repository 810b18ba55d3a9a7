//! # Engine Module
//!
//! The jet correction algorithm: energy-scale correction chain, generator-level matching,
//! hybrid resolution smearing and systematic-variation propagation.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Data mode, calibration keys, azimuth policy and output layout
//! - **Binding** ([`context`]) - Resolves named capabilities once from a correction set
//! - **Tasks** ([`tasks`]) - The four per-jet stages, each a pure function of its inputs
//! - **Progress Monitoring** ([`progress`]) - Batch progress callbacks
//! - **Error Handling** ([`error`]) - Engine-level error type
//!
//! ## Key Capabilities
//!
//! - **Deterministic energy-scale chain** (L1 → L2 → L3 → residual on data)
//! - **Reproducible smearing** using a generator seeded per jet from the event number and
//!   pseudorapidity, never a shared global stream
//! - **Parallel evaluation** across jets and events behind the `parallel` feature

pub mod config;
pub mod context;
pub mod error;
pub mod progress;
pub mod tasks;
pub mod utils;

//! ipconf-core
//!
//! Core library for turning an IP/interconnect workbook into a fixed-width
//! configuration report.
//!
//! This crate defines the config model, the workbook input adapter, identity
//! resolution, property propagation, and report rendering. All substantive
//! logic lives here so it is fully testable and reusable from multiple
//! frontends.

pub mod error;
pub mod input;
pub mod model;
pub mod project;
pub mod report;
pub mod services;

pub use error::{GenError, GenResult, Warning};

/// Returns the library version as encoded at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

//! Project configuration and on-disk layout.
//!
//! For now, we define:
//! - `GeneratorConfig`: serializable generator settings (role policy, report order,
//!   header names, output file).
//! - `ProjectLayout`: computed paths for the config and report.
//! - Helpers to load and save the config.

pub mod config;
pub mod layout;
pub mod util;

pub use config::*;
pub use layout::*;
pub use util::*;

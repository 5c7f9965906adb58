//! Tabular input adapter.
//!
//! Workbooks arrive as structured documents (YAML or JSON) holding the two
//! sheets of the original spreadsheet: the IP table and the interconnect table.
//! This module locates the document, deserializes it, and turns the sheets into
//! typed rows for the resolver.

pub mod sheets;
pub mod workbook;

pub use sheets::*;
pub use workbook::*;

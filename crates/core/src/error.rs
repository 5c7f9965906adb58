//! Error and warning types for the generation pipeline.
//!
//! Fatal conditions are `GenError` values and abort the pipeline before any
//! output is written. Non-fatal conditions are collected as `Warning`s and
//! handed back to the caller next to the result.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Role;

/// Fatal error raised while loading, resolving, or writing a configuration.
#[derive(Debug, Error)]
pub enum GenError {
    /// No workbook could be located at the given path.
    #[error("No workbook (.yaml, .yml, .json) found at {0}")]
    InputNotFound(PathBuf),

    /// The workbook exists but is not a readable document.
    #[error("Invalid workbook {path}: {reason}")]
    InvalidWorkbook { path: PathBuf, reason: String },

    /// A required column is missing from a sheet header.
    #[error("Sheet '{sheet}' is missing required column '{column}'")]
    Schema { sheet: String, column: String },

    /// A numeric cell could not be parsed.
    ///
    /// `row` is the 1-based row number as it appears in the sheet, header included.
    #[error("Sheet '{sheet}' row {row}, column '{column}': expected an integer, found {found}")]
    MalformedInput { sheet: String, row: usize, column: String, found: String },

    /// Writing the report failed.
    #[error("Failed to write report to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience result type for pipeline operations.
pub type GenResult<T> = Result<T, GenError>;

/// Non-fatal condition surfaced for audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// A name appears in both a master list and a slave list; resolved to `resolved_as`.
    RoleConflict { name: String, resolved_as: Role },
    /// An interconnect lists a name that has no IP table entry.
    DanglingReference { interconnect: String, name: String, listed_as: Role },
    /// An IP table entry is referenced by no interconnect (membership policy only).
    Unattached { name: String, resolved_as: Role },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::RoleConflict { name, resolved_as } => write!(
                f,
                "IP '{}' is listed as both master and slave; resolved as {}",
                name,
                resolved_as.label()
            ),
            Warning::DanglingReference { interconnect, name, listed_as } => write!(
                f,
                "{} IP '{}' on interconnect '{}' not found in IP table",
                listed_as.label(),
                name,
                interconnect
            ),
            Warning::Unattached { name, resolved_as } => write!(
                f,
                "IP '{}' is not connected to any interconnect; resolved as {}",
                name,
                resolved_as.label()
            ),
        }
    }
}

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GenError, GenResult};
use crate::project::CONFIG_FILE_NAME;

/// Extensions accepted as workbook documents.
pub const WORKBOOK_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

/// A single spreadsheet cell, already type-coerced by the exporter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    /// True for null cells and whitespace-only text.
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Null => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Trimmed textual form of the cell; empty for null.
    pub fn text(&self) -> String {
        match self {
            Cell::Null => String::new(),
            Cell::Text(s) => s.trim().to_string(),
            other => other.to_string(),
        }
    }

    /// Non-negative integer value, accepting integral floats and numeric text.
    pub fn as_count(&self) -> Option<u64> {
        match self {
            Cell::Int(i) => u64::try_from(*i).ok(),
            // `u64::MAX as f64` rounds up to 2^64, which is itself out of range.
            Cell::Float(f)
                if f.is_finite() && f.fract() == 0.0 && *f >= 0.0 && *f < u64::MAX as f64 =>
            {
                Some(*f as u64)
            }
            Cell::Text(s) => s.trim().parse::<u64>().ok(),
            _ => None,
        }
    }

    /// Truthiness of a role-flag cell.
    pub fn is_truthy(&self) -> bool {
        match self {
            Cell::Null => false,
            Cell::Bool(b) => *b,
            Cell::Int(i) => *i != 0,
            Cell::Float(f) => *f != 0.0,
            Cell::Text(s) => matches!(
                s.trim().to_ascii_lowercase().as_str(),
                "true" | "yes" | "y" | "1" | "x" | "m" | "master"
            ),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => write!(f, "empty"),
            Cell::Bool(b) => write!(f, "{b}"),
            Cell::Int(i) => write!(f, "{i}"),
            Cell::Float(x) => write!(f, "{x}"),
            Cell::Text(s) => write!(f, "'{s}'"),
        }
    }
}

/// One sheet: row 0 is the header, the rest are data rows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Sheet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn header(&self) -> &[Cell] {
        self.rows.first().map(|r| r.as_slice()).unwrap_or(&[])
    }

    /// Data rows paired with their 1-based sheet row number.
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &[Cell])> {
        self.rows.iter().enumerate().skip(1).map(|(idx, row)| (idx + 1, row.as_slice()))
    }

    /// Position of the header cell matching `title`, ignoring case and surrounding spaces.
    pub fn column(&self, title: &str) -> Option<usize> {
        let wanted = title.trim().to_lowercase();
        self.header().iter().position(|cell| cell.text().to_lowercase() == wanted)
    }
}

/// A workbook document holding the IP sheet and, optionally, the interconnect sheet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Workbook {
    #[serde(default)]
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Read a workbook from disk, choosing the format from the extension.
    pub fn from_path(path: &Path) -> GenResult<Self> {
        if !path.is_file() {
            return Err(GenError::InputNotFound(path.to_path_buf()));
        }
        let invalid = |reason: String| GenError::InvalidWorkbook { path: path.to_path_buf(), reason };
        let body = fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
        match extension(path).as_deref() {
            Some("json") => Self::from_json_str(&body).map_err(|e| invalid(e.to_string())),
            Some("yaml" | "yml") => Self::from_yaml_str(&body).map_err(|e| invalid(e.to_string())),
            _ => Err(invalid("unsupported extension".to_string())),
        }
    }

    pub fn from_json_str(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    pub fn from_yaml_str(body: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(body)
    }

    /// Sheet `index` with its display name (`Sheet1`, `Sheet2`, ... when unnamed).
    pub fn sheet(&self, index: usize) -> Option<(String, &Sheet)> {
        self.sheets.get(index).map(|sheet| {
            let name = sheet.name.clone().unwrap_or_else(|| format!("Sheet{}", index + 1));
            (name, sheet)
        })
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension().and_then(|e| e.to_str()).map(|e| e.to_ascii_lowercase())
}

/// Locate the workbook to process.
///
/// A file path is returned as-is when it exists. For a directory, the first
/// workbook by file name is chosen; the generator's own config file is skipped.
pub fn find_workbook(path: &Path) -> GenResult<PathBuf> {
    if path.is_file() {
        return Ok(path.to_path_buf());
    }
    if !path.is_dir() {
        return Err(GenError::InputNotFound(path.to_path_buf()));
    }

    let entries =
        fs::read_dir(path).map_err(|_| GenError::InputNotFound(path.to_path_buf()))?;
    let mut candidates: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.is_file())
        .filter(|p| p.file_name().and_then(|n| n.to_str()) != Some(CONFIG_FILE_NAME))
        .filter(|p| extension(p).is_some_and(|ext| WORKBOOK_EXTENSIONS.contains(&ext.as_str())))
        .collect();
    candidates.sort();

    match candidates.into_iter().next() {
        Some(found) => {
            log::debug!("Found workbook: {}", found.display());
            Ok(found)
        }
        None => Err(GenError::InputNotFound(path.to_path_buf())),
    }
}

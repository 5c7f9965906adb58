#![allow(dead_code)]

use std::path::{Path, PathBuf};

use ipconf_core::input::Workbook;

/// IP sheet header used by most fixtures.
pub const IP_HEADER: &str = "[ip name, read/write, bit width, frequency, clk domain]";

/// Interconnect sheet header used by most fixtures.
pub const IC_HEADER: &str =
    "[interconnect name, bit width, frequency, protocol, clk domain, set of masters, set of slaves]";

/// Build a two-sheet YAML workbook from row literals.
pub fn workbook_yaml(ip_rows: &[&str], ic_rows: &[&str]) -> String {
    let mut body = String::from("sheets:\n  - name: IPs\n    rows:\n");
    body.push_str(&format!("      - {IP_HEADER}\n"));
    for row in ip_rows {
        body.push_str(&format!("      - {row}\n"));
    }
    body.push_str("  - name: Interconnects\n    rows:\n");
    body.push_str(&format!("      - {IC_HEADER}\n"));
    for row in ic_rows {
        body.push_str(&format!("      - {row}\n"));
    }
    body
}

pub fn workbook(ip_rows: &[&str], ic_rows: &[&str]) -> Workbook {
    Workbook::from_yaml_str(&workbook_yaml(ip_rows, ic_rows)).expect("fixture workbook parses")
}

/// Write a YAML workbook into `dir` and return its path.
pub fn write_workbook(dir: &Path, file_name: &str, ip_rows: &[&str], ic_rows: &[&str]) -> PathBuf {
    let path = dir.join(file_name);
    std::fs::write(&path, workbook_yaml(ip_rows, ic_rows)).expect("write workbook");
    path
}

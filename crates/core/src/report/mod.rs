//! Fixed-width text rendering of a config model.
//!
//! One header line, one separator line, then one row per IP ordered by canonical
//! identifier. Every field is left-justified to its column width and never
//! truncated, so an over-long value pushes the rest of its row to the right.

use crate::model::{CanonicalId, ConfigModel, IpRecord};
use crate::project::IdOrder;

/// Column titles and widths, in output order.
pub const COLUMNS: [(&str, usize); 9] = [
    ("IP NAME", 15),
    ("TYPE", 10),
    ("READ/WRITE", 15),
    ("BIT WIDTH", 15),
    ("FREQUENCY", 15),
    ("PROTOCOL", 15),
    ("CLK DOMAIN", 15),
    ("INTERCONNECT", 15),
    ("ORIGINAL IP", 15),
];

/// Width of the `=` separator under the header.
pub const SEPARATOR_WIDTH: usize = 150;

/// Records of `model` in report order.
pub fn sorted_records(model: &ConfigModel, order: IdOrder) -> Vec<&IpRecord> {
    let mut records: Vec<&IpRecord> = model.ips.iter().collect();
    match order {
        IdOrder::Numeric => records.sort_by_key(|ip| ip.canonical_id),
        IdOrder::Lexicographic => records.sort_by_key(|ip| ip.canonical_id.to_string()),
    }
    records
}

/// Sort bare identifiers the same way `sorted_records` orders rows.
pub fn sort_ids(ids: &mut [CanonicalId], order: IdOrder) {
    match order {
        IdOrder::Numeric => ids.sort(),
        IdOrder::Lexicographic => ids.sort_by_key(|id| id.to_string()),
    }
}

/// Header line without trailing newline.
pub fn render_header() -> String {
    let titles: Vec<&str> = COLUMNS.iter().map(|(title, _)| *title).collect();
    format_row(&titles)
}

/// One report row for a record, without trailing newline.
pub fn render_row(ip: &IpRecord) -> String {
    let id = ip.canonical_id.to_string();
    let bit_width = ip.final_bit_width.to_string();
    let frequency = ip.final_frequency.to_string();
    format_row(&[
        id.as_str(),
        ip.role.label(),
        ip.read_write.as_str(),
        bit_width.as_str(),
        frequency.as_str(),
        ip.final_protocol.as_str(),
        ip.final_clk_domain.as_str(),
        ip.connected_interconnect.as_str(),
        ip.original_name.as_str(),
    ])
}

/// Full report text, newline-terminated.
pub fn render_report(model: &ConfigModel, order: IdOrder) -> String {
    let mut out = String::new();
    out.push_str(&render_header());
    out.push('\n');
    out.push_str(&"=".repeat(SEPARATOR_WIDTH));
    out.push('\n');
    for ip in sorted_records(model, order) {
        out.push_str(&render_row(ip));
        out.push('\n');
    }
    out
}

fn format_row(fields: &[&str]) -> String {
    fields
        .iter()
        .zip(COLUMNS.iter())
        .map(|(field, (_, width))| format!("{:<width$}", field, width = *width))
        .collect()
}

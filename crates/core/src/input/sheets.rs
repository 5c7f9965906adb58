use std::collections::HashMap;

use crate::error::{GenError, GenResult};
use crate::input::{Cell, Sheet, Workbook};
use crate::model::{InterconnectRecord, IpRow, UNSET};
use crate::project::{ColumnNames, GeneratorConfig, RolePolicy};

/// Fallback titles for IP table columns, by position.
const IP_COLUMN_TITLES: [&str; 5] = ["ip name", "read/write", "bit width", "frequency", "clk domain"];

/// Fallback titles for the positional interconnect columns.
const IC_COLUMN_TITLES: [&str; 5] = ["interconnect name", "bit width", "frequency", "protocol", "clk domain"];

/// Both tables of a workbook, materialised once.
#[derive(Debug, Clone, Default)]
pub struct TableSet {
    pub ip_rows: Vec<IpRow>,
    pub interconnects: Vec<InterconnectRecord>,
}

/// Read the IP sheet (first) and the interconnect sheet (second, optional).
pub fn read_tables(workbook: &Workbook, config: &GeneratorConfig) -> GenResult<TableSet> {
    let ip_rows = match workbook.sheet(0) {
        Some((name, sheet)) => read_ip_table(
            &name,
            sheet,
            &config.columns,
            config.role_policy == RolePolicy::RowFlag,
        )?,
        None => Vec::new(),
    };
    let interconnects = match workbook.sheet(1) {
        Some((name, sheet)) => read_interconnect_table(&name, sheet, &config.columns)?,
        None => {
            log::debug!("Workbook has no interconnect sheet");
            Vec::new()
        }
    };
    Ok(TableSet { ip_rows, interconnects })
}

/// Read IP rows. Duplicate names keep the first row's position and the last row's values.
pub fn read_ip_table(
    sheet_name: &str,
    sheet: &Sheet,
    columns: &ColumnNames,
    with_role_flag: bool,
) -> GenResult<Vec<IpRow>> {
    if sheet.rows.is_empty() {
        return Ok(Vec::new());
    }
    let flag_col = if with_role_flag {
        Some(sheet.column(&columns.role_flag).ok_or_else(|| GenError::Schema {
            sheet: sheet_name.to_string(),
            column: columns.role_flag.clone(),
        })?)
    } else {
        None
    };

    let mut rows: Vec<IpRow> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();
    for (row_no, cells) in sheet.data_rows() {
        let name_cell = cell(cells, 0);
        if name_cell.is_empty() {
            continue;
        }
        let reader = RowReader { sheet_name, header: sheet.header(), titles: &IP_COLUMN_TITLES, cells, row_no };
        let row = IpRow {
            original_name: name_cell.text(),
            read_write: text_or_unset(cell(cells, 1)),
            bit_width: reader.count(2)?,
            frequency: reader.count(3)?,
            clk_domain: text_or_unset(cell(cells, 4)),
            role_flag: flag_col.map(|col| cell(cells, col).is_truthy()),
            row: row_no,
        };
        log::debug!("Found IP: {}", row.original_name);
        match seen.get(&row.original_name) {
            Some(&idx) => rows[idx] = row,
            None => {
                seen.insert(row.original_name.clone(), rows.len());
                rows.push(row);
            }
        }
    }
    Ok(rows)
}

/// Read interconnect rows. Key columns are located by header name.
pub fn read_interconnect_table(
    sheet_name: &str,
    sheet: &Sheet,
    columns: &ColumnNames,
) -> GenResult<Vec<InterconnectRecord>> {
    if sheet.rows.is_empty() {
        return Ok(Vec::new());
    }
    let locate = |title: &str| {
        sheet.column(title).ok_or_else(|| GenError::Schema {
            sheet: sheet_name.to_string(),
            column: title.to_string(),
        })
    };
    let name_col = locate(&columns.interconnect_name)?;
    let masters_col = locate(&columns.masters)?;
    let slaves_col = locate(&columns.slaves)?;

    let mut records: Vec<InterconnectRecord> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();
    for (row_no, cells) in sheet.data_rows() {
        let name_cell = cell(cells, name_col);
        if name_cell.is_empty() {
            continue;
        }
        let reader = RowReader { sheet_name, header: sheet.header(), titles: &IC_COLUMN_TITLES, cells, row_no };
        let record = InterconnectRecord {
            name: name_cell.text(),
            bit_width: reader.count(1)?,
            frequency: reader.count(2)?,
            protocol: text_or_unset(cell(cells, 3)),
            clk_domain: text_or_unset(cell(cells, 4)),
            master_ips: split_names(cell(cells, masters_col)),
            slave_ips: split_names(cell(cells, slaves_col)),
        };
        log::debug!(
            "Interconnect {} has masters: {:?} and slaves: {:?}",
            record.name,
            record.master_ips,
            record.slave_ips
        );
        match seen.get(&record.name) {
            Some(&idx) => records[idx] = record,
            None => {
                seen.insert(record.name.clone(), records.len());
                records.push(record);
            }
        }
    }
    Ok(records)
}

/// Split a comma-separated name list, trimming items and dropping empty ones.
pub fn split_names(cell: &Cell) -> Vec<String> {
    cell.text()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

static NULL_CELL: Cell = Cell::Null;

fn cell(cells: &[Cell], idx: usize) -> &Cell {
    cells.get(idx).unwrap_or(&NULL_CELL)
}

fn text_or_unset(cell: &Cell) -> String {
    if cell.is_empty() {
        UNSET.to_string()
    } else {
        cell.text()
    }
}

struct RowReader<'a> {
    sheet_name: &'a str,
    header: &'a [Cell],
    titles: &'a [&'a str],
    cells: &'a [Cell],
    row_no: usize,
}

impl RowReader<'_> {
    fn count(&self, idx: usize) -> GenResult<u64> {
        let value = cell(self.cells, idx);
        value.as_count().ok_or_else(|| GenError::MalformedInput {
            sheet: self.sheet_name.to_string(),
            row: self.row_no,
            column: self.title(idx),
            found: value.to_string(),
        })
    }

    fn title(&self, idx: usize) -> String {
        let from_header = cell(self.header, idx).text();
        if from_header.is_empty() {
            self.titles.get(idx).copied().unwrap_or("?").to_string()
        } else {
            from_header
        }
    }
}

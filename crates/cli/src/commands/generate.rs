use std::path::PathBuf;

use anyhow::{Context, Result};
use ipconf_core::error::Warning;
use ipconf_core::model::{InterconnectRecord, IpRecord};
use ipconf_core::report::sorted_records;
use ipconf_core::services::pipeline::{generate_from_path, write_report};
use serde::Serialize;

use crate::commands::{ensure_parent_dir, print_warnings, ConfigOverrides, ProjectSetup};

/// JSON view of a completed generation.
#[derive(Debug, Serialize)]
pub struct GenerateSummary<'a> {
    pub workbook: String,
    pub output: String,
    pub role_policy: &'static str,
    pub id_order: &'static str,
    pub ips: Vec<&'a IpRecord>,
    pub interconnects: &'a [InterconnectRecord],
    pub warnings: &'a [Warning],
}

/// Run the full pipeline and write the report.
///
/// Nothing is written when loading or resolution fails.
pub fn generate_command(
    root: &str,
    input: Option<&str>,
    output: Option<&str>,
    overrides: ConfigOverrides,
    preview: bool,
    json: bool,
) -> Result<PathBuf> {
    let setup = ProjectSetup::load(root, input, overrides)?;
    let outcome = generate_from_path(&setup.input, &setup.config)
        .with_context(|| format!("Failed to generate config from {}", setup.input.display()))?;
    let generation = &outcome.generation;

    let output_path = setup.output_path(output);
    ensure_parent_dir(&output_path)?;
    write_report(&output_path, &generation.report).context("Failed to write config report")?;

    if json {
        let summary = GenerateSummary {
            workbook: outcome.workbook_path.display().to_string(),
            output: output_path.display().to_string(),
            role_policy: setup.config.role_policy.as_str(),
            id_order: setup.config.id_order.as_str(),
            ips: sorted_records(&generation.model, setup.config.id_order),
            interconnects: &generation.model.interconnects,
            warnings: &generation.warnings,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(output_path);
    }

    println!("Generated config:");
    println!("  Workbook: {}", outcome.workbook_path.display());
    println!("  Policy: {}", setup.config.role_policy.as_str());
    println!("  Order: {}", setup.config.id_order.as_str());
    println!(
        "  Processed {} IPs and {} interconnects",
        generation.model.ips.len(),
        generation.model.interconnects.len()
    );
    println!("  Output: {}", output_path.display());
    print_warnings(&generation.warnings);

    if preview {
        println!();
        println!("Final Output Preview:");
        print!("{}", generation.report);
    }

    Ok(output_path)
}

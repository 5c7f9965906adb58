use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GenError, GenResult, Warning};
use crate::input::{find_workbook, read_tables, TableSet, Workbook};
use crate::model::ConfigModel;
use crate::project::GeneratorConfig;
use crate::report::render_report;
use crate::services::propagate::propagate_properties;
use crate::services::resolve::resolve_identities;

/// Result of running the pipeline on one workbook.
#[derive(Debug, Clone)]
pub struct Generation {
    pub model: ConfigModel,
    pub warnings: Vec<Warning>,
    /// Fully rendered report text.
    pub report: String,
}

/// A generation together with the workbook it came from.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub workbook_path: PathBuf,
    pub generation: Generation,
}

/// Resolve and propagate already-materialised tables.
pub fn build_model(tables: &TableSet, config: &GeneratorConfig) -> (ConfigModel, Vec<Warning>) {
    let resolution = resolve_identities(config.role_policy, &tables.ip_rows, &tables.interconnects);
    let mut model = resolution.model;
    let mut warnings = resolution.warnings;
    warnings.extend(propagate_properties(&mut model));
    (model, warnings)
}

/// Run the in-memory part of the pipeline: read, resolve, propagate, render.
pub fn generate(workbook: &Workbook, config: &GeneratorConfig) -> GenResult<Generation> {
    let tables = read_tables(workbook, config)?;
    let (model, warnings) = build_model(&tables, config);
    let report = render_report(&model, config.id_order);
    log::info!(
        "Processed {} IPs and {} interconnects ({} warnings)",
        model.ips.len(),
        model.interconnects.len(),
        warnings.len()
    );
    let unattached = model.ips.iter().filter(|ip| ip.is_unattached()).count();
    if unattached > 0 {
        log::info!("{unattached} IPs are not connected to any interconnect");
    }
    Ok(Generation { model, warnings, report })
}

/// Locate and load the workbook under `input`, then run the pipeline on it.
pub fn generate_from_path(input: &Path, config: &GeneratorConfig) -> GenResult<GenerationOutcome> {
    let workbook_path = find_workbook(input)?;
    log::info!("Reading workbook {}", workbook_path.display());
    let workbook = Workbook::from_path(&workbook_path)?;
    let generation = generate(&workbook, config)?;
    Ok(GenerationOutcome { workbook_path, generation })
}

/// Write a rendered report in one call, so a failed run never leaves a partial file.
pub fn write_report(path: &Path, report: &str) -> GenResult<()> {
    fs::write(path, report).map_err(|source| GenError::Write { path: path.to_path_buf(), source })?;
    log::info!("Config file generated: {}", path.display());
    Ok(())
}

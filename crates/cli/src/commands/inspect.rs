use anyhow::{Context, Result};
use ipconf_core::error::Warning;
use ipconf_core::model::{CanonicalId, Role};
use ipconf_core::report::sort_ids;
use ipconf_core::services::pipeline::generate_from_path;
use serde::Serialize;

use crate::commands::{print_warnings, ConfigOverrides, ProjectSetup};

/// One original-name → canonical-id assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdentityEntry {
    pub id: String,
    pub original_name: String,
    pub role: Role,
    pub connected_interconnect: String,
}

#[derive(Debug, Serialize)]
pub struct InspectSnapshot {
    pub workbook: String,
    pub role_policy: &'static str,
    pub identities: Vec<IdentityEntry>,
    pub warnings: Vec<Warning>,
}

/// Resolve and propagate without writing a report.
pub fn inspect_snapshot(
    root: &str,
    input: Option<&str>,
    overrides: ConfigOverrides,
) -> Result<InspectSnapshot> {
    let setup = ProjectSetup::load(root, input, overrides)?;
    let outcome = generate_from_path(&setup.input, &setup.config)
        .with_context(|| format!("Failed to resolve identities from {}", setup.input.display()))?;
    let generation = outcome.generation;
    let model = &generation.model;

    let mut ids: Vec<CanonicalId> = model.mapping().into_values().collect();
    sort_ids(&mut ids, setup.config.id_order);
    let identities = ids
        .into_iter()
        .filter_map(|id| {
            let ip = model.get(model.original_for(id)?)?;
            Some(IdentityEntry {
                id: id.to_string(),
                original_name: ip.original_name.clone(),
                role: id.role,
                connected_interconnect: ip.connected_interconnect.clone(),
            })
        })
        .collect();

    Ok(InspectSnapshot {
        workbook: outcome.workbook_path.display().to_string(),
        role_policy: setup.config.role_policy.as_str(),
        identities,
        warnings: generation.warnings,
    })
}

/// Print the original-name → canonical-id mapping.
pub fn inspect_command(
    root: &str,
    input: Option<&str>,
    overrides: ConfigOverrides,
    json: bool,
) -> Result<()> {
    let snapshot = inspect_snapshot(root, input, overrides)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("Workbook: {}", snapshot.workbook);
    println!("Policy: {}", snapshot.role_policy);
    println!("Identities ({}):", snapshot.identities.len());
    if snapshot.identities.is_empty() {
        println!("  (none)");
    }
    for entry in &snapshot.identities {
        println!("  {} <- {} [{}]", entry.id, entry.original_name, entry.connected_interconnect);
    }
    print_warnings(&snapshot.warnings);

    Ok(())
}

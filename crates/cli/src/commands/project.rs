use std::fs;

use anyhow::{anyhow, Context, Result};
use ipconf_core::input::find_workbook;
use ipconf_core::project::{
    load_generator_config, save_generator_config, GeneratorConfig, ProjectLayout,
};
use serde::Serialize;

use crate::canonicalize_or_current;

#[derive(Debug, Serialize)]
pub struct ProjectInfoSnapshot {
    pub root: String,
    pub config_file: String,
    pub config_present: bool,
    pub workbook: Option<String>,
    pub output_file: String,
    pub config: GeneratorConfig,
}

/// Write the default generator config at `root`.
pub fn init_config_command(root: &str, force: bool) -> Result<()> {
    let root_path = canonicalize_or_current(root)?;
    let layout = ProjectLayout::new(&root_path);

    if layout.config_path.exists() && !force {
        return Err(anyhow!(
            "Config already exists at {}; use --force to overwrite",
            layout.config_path.display()
        ));
    }

    fs::create_dir_all(&layout.root)
        .with_context(|| format!("Failed to create project root: {}", layout.root.display()))?;
    let config = GeneratorConfig::default();
    save_generator_config(&layout, &config)?;

    println!("Initialized generator config:");
    println!("  Root: {}", layout.root.display());
    println!("  Config: {}", layout.config_path.display());
    println!("  Policy: {}", config.role_policy.as_str());
    println!("  Order: {}", config.id_order.as_str());
    println!("  Output: {}", layout.output_path(&config).display());

    Ok(())
}

/// Show the effective configuration and the workbook that would be used.
pub fn project_info_command(root: &str, json: bool) -> Result<()> {
    let root_path = canonicalize_or_current(root)?;
    let layout = ProjectLayout::new(&root_path);
    let config = load_generator_config(&layout)?;
    let workbook = find_workbook(&layout.root).ok().map(|p| p.display().to_string());

    let snapshot = ProjectInfoSnapshot {
        root: layout.root.display().to_string(),
        config_file: layout.config_path.display().to_string(),
        config_present: layout.config_path.is_file(),
        workbook,
        output_file: layout.output_path(&config).display().to_string(),
        config,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("ipconf Project Info");
    println!("===================");
    println!("Root: {}", snapshot.root);
    println!(
        "Config file: {} ({})",
        snapshot.config_file,
        if snapshot.config_present { "OK" } else { "MISSING, using defaults" }
    );
    println!("Workbook: {}", snapshot.workbook.as_deref().unwrap_or("(none)"));
    println!("Output file: {}", snapshot.output_file);
    println!("Policy: {}", snapshot.config.role_policy.as_str());
    println!("Order: {}", snapshot.config.id_order.as_str());
    println!("Columns:");
    println!("- interconnect name: {}", snapshot.config.columns.interconnect_name);
    println!("- masters: {}", snapshot.config.columns.masters);
    println!("- slaves: {}", snapshot.config.columns.slaves);
    println!("- role flag: {}", snapshot.config.columns.role_flag);

    Ok(())
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ValueEnum;
use ipconf_core::project::{load_generator_config, GeneratorConfig, IdOrder, ProjectLayout, RolePolicy};
use ipconf_core::Warning;

use crate::{canonicalize_or_current, resolve_against_root};

/// `--policy` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Role from the interconnect master/slave lists.
    Membership,
    /// Role from the IP table's master flag column.
    RowFlag,
}

impl From<PolicyArg> for RolePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Membership => RolePolicy::Membership,
            PolicyArg::RowFlag => RolePolicy::RowFlag,
        }
    }
}

/// `--order` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    /// M2 before M10.
    Numeric,
    /// M10 before M2.
    Lexicographic,
}

impl From<OrderArg> for IdOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Numeric => IdOrder::Numeric,
            OrderArg::Lexicographic => IdOrder::Lexicographic,
        }
    }
}

/// Command-line overrides layered over the config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigOverrides {
    pub policy: Option<PolicyArg>,
    pub order: Option<OrderArg>,
}

/// Everything a command needs to run the pipeline for one project root.
#[derive(Debug, Clone)]
pub struct ProjectSetup {
    pub layout: ProjectLayout,
    pub config: GeneratorConfig,
    /// Workbook file or directory to search.
    pub input: PathBuf,
}

impl ProjectSetup {
    /// Resolve the root, load its config, and apply overrides.
    pub fn load(root: &str, input: Option<&str>, overrides: ConfigOverrides) -> Result<Self> {
        let root_path = canonicalize_or_current(root)?;
        let layout = ProjectLayout::new(&root_path);
        let config = load_generator_config(&layout)?
            .with_policy(overrides.policy.map(RolePolicy::from))
            .with_order(overrides.order.map(IdOrder::from));
        let input = match input {
            Some(p) => resolve_against_root(&layout.root, p),
            None => layout.root.clone(),
        };
        log::debug!("Project root {}, input {}", layout.root.display(), input.display());
        Ok(Self { layout, config, input })
    }

    /// Report destination: explicit `--output`, else the configured file.
    pub fn output_path(&self, output: Option<&str>) -> PathBuf {
        match output {
            Some(p) => resolve_against_root(&self.layout.root, p),
            None => self.layout.output_path(&self.config),
        }
    }
}

/// Make sure the directory that will hold `path` exists.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    Ok(())
}

/// Print accumulated warnings in human-readable form.
pub fn print_warnings(warnings: &[Warning]) {
    if warnings.is_empty() {
        return;
    }
    println!("Warnings ({}):", warnings.len());
    for warning in warnings {
        println!("- {}", warning);
    }
}

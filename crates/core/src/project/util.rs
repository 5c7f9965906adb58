use anyhow::{Context, Result};

use crate::project::{GeneratorConfig, ProjectLayout};

/// Load the generator config for a layout, falling back to defaults when the file is absent.
pub fn load_generator_config(layout: &ProjectLayout) -> Result<GeneratorConfig> {
    if !layout.config_path.exists() {
        log::debug!("No config at {}; using defaults", layout.config_path.display());
        return Ok(GeneratorConfig::default());
    }
    let config_json = std::fs::read_to_string(&layout.config_path).with_context(|| {
        format!("Failed to read generator config at {}", layout.config_path.display())
    })?;
    let config: GeneratorConfig =
        serde_json::from_str(&config_json).context("Failed to parse generator config JSON")?;
    log::debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

/// Write a config to the layout's config path as pretty JSON.
pub fn save_generator_config(layout: &ProjectLayout, config: &GeneratorConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&layout.config_path, json).with_context(|| {
        format!("Failed to write generator config: {}", layout.config_path.display())
    })?;
    Ok(())
}

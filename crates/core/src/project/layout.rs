use std::path::{Path, PathBuf};

use crate::project::GeneratorConfig;

/// File name of the generator config inside a project root.
pub const CONFIG_FILE_NAME: &str = "ipconf.json";

/// Logical layout of a generator project on disk.
///
/// Derived from a chosen root path. It does not perform any IO itself.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    /// Directory holding the workbook and receiving the report.
    pub root: PathBuf,
    /// Path to the generator config file (JSON).
    pub config_path: PathBuf,
}

impl ProjectLayout {
    /// Compute the layout for a project rooted at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let config_path = root.join(CONFIG_FILE_NAME);
        Self { root, config_path }
    }

    /// Resolve the report path from the config, relative to `root` unless absolute.
    pub fn output_path(&self, config: &GeneratorConfig) -> PathBuf {
        let configured = Path::new(&config.output_file);
        if configured.is_absolute() {
            configured.to_path_buf()
        } else {
            self.root.join(configured)
        }
    }
}

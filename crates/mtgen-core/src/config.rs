use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings shared by every generator in a run.
///
/// Loaded from `mtgen.yaml` when present; every field has a default so an
/// empty or missing file yields a usable config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenConfig {
    /// Where generated files land. Relative paths resolve against the root.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Metadata API version written into `package.xml`.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Tracking-ticket prefix placed before the row label in custom
    /// permission descriptions.
    #[serde(default = "default_description_prefix")]
    pub description_prefix: String,

    #[serde(default = "default_permission_set_label")]
    pub permission_set_label: String,

    /// Write empty record values as `<value xsi:nil="true"/>` instead of an
    /// empty `<value></value>`.
    #[serde(default)]
    pub nil_empty_values: bool,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(paths::DEFAULT_OUTPUT_DIR)
}

fn default_api_version() -> String {
    "58.0".to_string()
}

fn default_description_prefix() -> String {
    "MT-0000 Bypass: ".to_string()
}

fn default_permission_set_label() -> String {
    "MicroTriggers Integration User E".to_string()
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            api_version: default_api_version(),
            description_prefix: default_description_prefix(),
            permission_set_label: default_permission_set_label(),
            nil_empty_values: false,
        }
    }
}

impl GenConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: GenConfig = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    /// Load `<root>/mtgen.yaml`, falling back to defaults when it is absent.
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Output directory with `root` applied.
    pub fn output_path(&self, root: &Path) -> PathBuf {
        paths::resolve(root, &self.output_dir)
    }
}

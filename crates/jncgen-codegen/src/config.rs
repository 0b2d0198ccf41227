//! Generator configuration types

use crate::error::CodegenResult;
use crate::naming::package_path;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "jncgen.toml";

/// Options controlling one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Base Java package of the generated hierarchy
    #[serde(default = "default_package")]
    pub package: String,

    /// Generate even when the schema carries errors
    #[serde(default)]
    pub ignore_errors: bool,

    /// Skip the `.schema` metadata file
    #[serde(default)]
    pub no_schema: bool,

    /// Version stamped into every class header
    #[serde(default = "default_version")]
    pub version: String,

    /// Date stamped into class headers
    ///
    /// Left unset, output is identical across runs.
    #[serde(default)]
    pub date: Option<String>,
}

fn default_package() -> String {
    "gen".to_string()
}

fn default_version() -> String {
    "1.0".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package: default_package(),
            ignore_errors: false,
            no_schema: false,
            version: default_version(),
            date: None,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text. Empty input yields defaults.
    pub fn from_toml_str(text: &str) -> CodegenResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CodegenResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Base package as a relative directory path
    pub fn package_dir(&self) -> PathBuf {
        package_path(&self.package)
    }
}

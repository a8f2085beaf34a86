//! Generator configuration (ccgen.toml format).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no config is given.
pub const CONFIG_FILE_NAME: &str = "ccgen.toml";

/// What to do when the package prefix lookup does not succeed cleanly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupPolicy {
    /// Warn and embed whatever the lookup printed.
    #[default]
    Proceed,
    /// Fail the run before anything is written.
    Abort,
}

/// Root generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Value of every record's `directory` field.
    pub directory: PathBuf,

    /// Compiler executable name (first argument).
    pub compiler: String,

    /// Flags placed between the compiler and the include flag.
    pub flags: Vec<String>,

    /// Package whose prefix provides the include directory.
    pub package: String,

    /// Prefix query command; the package name is appended as the last argument.
    pub query: Vec<String>,

    /// File name suffix selecting source files.
    pub suffix: String,

    /// Output file name, relative to the scanned directory.
    pub output: PathBuf,

    pub on_lookup_failure: LookupPolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("/Users/example/project"),
            compiler: "gcc-14".to_string(),
            flags: vec!["-O3".to_string()],
            package: "jpeg".to_string(),
            query: vec!["brew".to_string(), "--prefix".to_string()],
            suffix: ".c".to_string(),
            output: PathBuf::from("compile_commands.json"),
            on_lookup_failure: LookupPolicy::Proceed,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(toml: &str) -> crate::Result<Self> {
        let config: GeneratorConfig = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `dir/ccgen.toml` if it exists, defaults otherwise.
    pub fn load(dir: &Path) -> crate::Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            log::debug!("loading config from {}", path.display());
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Reject settings that cannot describe a run.
    pub fn validate(&self) -> crate::Result<()> {
        if self.query.is_empty() {
            return Err(crate::GenError::Validation(
                "`query` must name a program".to_string(),
            ));
        }
        if self.suffix.is_empty() {
            return Err(crate::GenError::Validation(
                "`suffix` must not be empty".to_string(),
            ));
        }
        if self.output.as_os_str().is_empty() {
            return Err(crate::GenError::Validation(
                "`output` must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

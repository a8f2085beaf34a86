//! The per-run compile command template.

use crate::compile_commands::CompileCommand;
use crate::config::GeneratorConfig;
use std::path::PathBuf;

/// Build the include flag for a package prefix.
///
/// An empty prefix still produces `-I/include`.
pub fn include_flag(prefix: &str) -> String {
    format!("-I{}/include", prefix)
}

/// Directory and arguments shared by every record of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate {
    pub directory: PathBuf,
    pub arguments: Vec<String>,
}

impl CommandTemplate {
    /// `[compiler, flags..., include_flag]` rooted at the configured directory.
    pub fn from_config(config: &GeneratorConfig, include_flag: String) -> Self {
        let mut arguments = Vec::with_capacity(config.flags.len() + 2);
        arguments.push(config.compiler.clone());
        arguments.extend(config.flags.iter().cloned());
        arguments.push(include_flag);

        Self {
            directory: config.directory.clone(),
            arguments,
        }
    }

    /// A record for `file`, everything else copied from the template.
    pub fn instantiate(&self, file: impl Into<PathBuf>) -> CompileCommand {
        CompileCommand {
            directory: self.directory.clone(),
            arguments: self.arguments.clone(),
            file: file.into(),
            command: None,
            output: None,
        }
    }
}

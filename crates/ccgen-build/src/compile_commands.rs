//! compile_commands.json records.
//!
//! The format is the JSON compilation database understood by clangd,
//! clang-tidy and friends: an array of objects, one per translation unit.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A single compile command from compile_commands.json.
///
/// Field order matters for the generated file: `directory`, `arguments`,
/// then `file`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileCommand {
    /// The working directory for compilation.
    pub directory: PathBuf,

    /// The compilation arguments (array form).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<String>,

    /// The source file path.
    pub file: PathBuf,

    /// The full compilation command (space-separated).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Output file (optional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl CompileCommand {
    /// Get the compilation arguments as a vector.
    pub fn get_args(&self) -> Vec<String> {
        if !self.arguments.is_empty() {
            self.arguments.clone()
        } else if let Some(cmd) = &self.command {
            // Simple space-split (doesn't handle quoted strings properly)
            cmd.split_whitespace().map(|s| s.to_string()).collect()
        } else {
            Vec::new()
        }
    }

    /// Extract include directories from the arguments.
    pub fn get_includes(&self) -> Vec<PathBuf> {
        let args = self.get_args();
        let mut includes = Vec::new();

        let mut i = 0;
        while i < args.len() {
            if (args[i] == "-I" || args[i] == "-isystem") && i + 1 < args.len() {
                includes.push(PathBuf::from(&args[i + 1]));
                i += 2;
            } else if let Some(dir) = args[i].strip_prefix("-I") {
                includes.push(PathBuf::from(dir));
                i += 1;
            } else {
                i += 1;
            }
        }

        includes
    }
}

/// Collection of compile commands (one compile_commands.json).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileCommands {
    commands: Vec<CompileCommand>,
}

impl CompileCommands {
    /// Create a database from already built commands.
    pub fn new(commands: Vec<CompileCommand>) -> Self {
        Self { commands }
    }

    /// Load compile commands from a JSON file.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parse compile commands from a JSON string.
    pub fn from_str(json: &str) -> crate::Result<Self> {
        let commands: Vec<CompileCommand> = serde_json::from_str(json)?;
        Ok(Self { commands })
    }

    /// Get all compile commands.
    pub fn commands(&self) -> &[CompileCommand] {
        &self.commands
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the database has no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Source files in database order.
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.commands.iter().map(|cmd| cmd.file.as_path())
    }

    /// Find the compile command for a specific source file.
    pub fn find_command(&self, source: &Path) -> Option<&CompileCommand> {
        self.commands
            .iter()
            .find(|cmd| cmd.file == source || cmd.file.ends_with(source))
    }

    /// Render as pretty JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(&self.commands)?)
    }

    /// Write the database to `path`, replacing any previous content.
    pub fn write_to(&self, path: &Path) -> crate::Result<()> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl FromIterator<CompileCommand> for CompileCommands {
    fn from_iter<I: IntoIterator<Item = CompileCommand>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

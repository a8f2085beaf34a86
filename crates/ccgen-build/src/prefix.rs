//! Package prefix discovery.
//!
//! The include directory for the compile template comes from asking a
//! package manager where a library is installed (`brew --prefix jpeg`).
//! Resolution sits behind [`PrefixResolver`] so callers can substitute a
//! fixed value.

use std::process::{Command, Stdio};

/// Outcome of a prefix lookup.
///
/// `prefix` is always usable as a string, even when the lookup failed;
/// `failure` says what went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixLookup {
    pub prefix: String,
    pub failure: Option<String>,
}

impl PrefixLookup {
    /// A clean lookup.
    pub fn ok(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            failure: None,
        }
    }

    /// A failed lookup, keeping whatever prefix was produced.
    pub fn failed(prefix: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            failure: Some(reason.into()),
        }
    }
}

/// Maps a package name to its installation prefix.
pub trait PrefixResolver {
    fn resolve(&self, package: &str) -> PrefixLookup;
}

/// Resolver that runs an external query command.
#[derive(Debug, Clone)]
pub struct PackageQuery {
    program: String,
    args: Vec<String>,
}

impl PackageQuery {
    /// Run `program args... <package>`.
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build from a config-style command line (`["brew", "--prefix"]`).
    pub fn from_command_line(command: &[String]) -> crate::Result<Self> {
        let (program, args) = command.split_first().ok_or_else(|| {
            crate::GenError::Validation("prefix query command is empty".to_string())
        })?;
        Ok(Self::new(program.clone(), args.to_vec()))
    }
}

impl PrefixResolver for PackageQuery {
    fn resolve(&self, package: &str) -> PrefixLookup {
        log::debug!("running {} {} {}", self.program, self.args.join(" "), package);

        // Blocks until the child exits; stderr goes straight to the terminal.
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(package)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output();

        match output {
            Ok(output) => {
                let stdout = String::from_utf8_lossy(&output.stdout);
                let prefix = stdout.trim();
                if output.status.success() {
                    PrefixLookup::ok(prefix)
                } else {
                    PrefixLookup::failed(
                        prefix,
                        format!("`{}` exited with {}", self.program, output.status),
                    )
                }
            }
            Err(e) => PrefixLookup::failed("", format!("failed to run `{}`: {}", self.program, e)),
        }
    }
}

/// Resolver returning a preset prefix.
#[derive(Debug, Clone)]
pub struct FixedPrefix(pub String);

impl PrefixResolver for FixedPrefix {
    fn resolve(&self, _package: &str) -> PrefixLookup {
        PrefixLookup::ok(self.0.trim())
    }
}

impl<R: PrefixResolver + ?Sized> PrefixResolver for Box<R> {
    fn resolve(&self, package: &str) -> PrefixLookup {
        (**self).resolve(package)
    }
}

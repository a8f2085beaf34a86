//! The generation pipeline: lookup, template, discovery, write.

use crate::compile_commands::CompileCommands;
use crate::config::{GeneratorConfig, LookupPolicy};
use crate::discover::find_sources;
use crate::prefix::{PackageQuery, PrefixResolver};
use crate::template::{include_flag, CommandTemplate};
use crate::{GenError, Result};
use std::path::{Path, PathBuf};

/// Generates compile_commands.json for one directory.
pub struct Generator<R> {
    config: GeneratorConfig,
    resolver: R,
}

impl Generator<PackageQuery> {
    /// A generator that queries the package manager named in the config.
    pub fn with_query(config: GeneratorConfig) -> Result<Self> {
        let resolver = PackageQuery::from_command_line(&config.query)?;
        Ok(Self::new(config, resolver))
    }
}

impl<R: PrefixResolver> Generator<R> {
    /// Create a generator with an explicit prefix resolver.
    pub fn new(config: GeneratorConfig, resolver: R) -> Self {
        Self { config, resolver }
    }

    /// Resolve the include prefix and build the shared template.
    pub fn template(&self) -> Result<CommandTemplate> {
        let package = &self.config.package;
        let lookup = self.resolver.resolve(package);

        if let Some(reason) = lookup.failure {
            match self.config.on_lookup_failure {
                LookupPolicy::Proceed => {
                    log::warn!(
                        "prefix lookup for `{}` failed ({}); using {:?}",
                        package,
                        reason,
                        lookup.prefix
                    );
                }
                LookupPolicy::Abort => {
                    return Err(GenError::PrefixLookup {
                        package: package.clone(),
                        reason,
                    });
                }
            }
        }

        let template = CommandTemplate::from_config(&self.config, include_flag(&lookup.prefix));
        log::debug!("template arguments: {:?}", template.arguments);
        Ok(template)
    }

    /// Build the database for `dir` without writing it.
    pub fn generate(&self, dir: &Path) -> Result<CompileCommands> {
        let template = self.template()?;
        let sources = find_sources(dir, &self.config.suffix)?;

        Ok(sources
            .into_iter()
            .inspect(|file| log::debug!("adding {}", file))
            .map(|file| template.instantiate(file))
            .collect())
    }

    /// Where [`Generator::run`] writes for `dir`.
    pub fn output_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.config.output)
    }

    /// Generate for `dir` and write the result, replacing any previous file.
    pub fn run(&self, dir: &Path) -> Result<PathBuf> {
        let commands = self.generate(dir)?;
        let path = self.output_path(dir);
        commands.write_to(&path)?;
        log::info!("wrote {} entries to {}", commands.len(), path.display());
        Ok(path)
    }
}

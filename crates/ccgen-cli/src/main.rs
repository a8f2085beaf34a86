use ccgen_build::{
    FixedPrefix, GenError, Generator, GeneratorConfig, LookupPolicy, PackageQuery,
    PrefixResolver,
};
use clap::Parser;
use miette::{miette, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "ccgen")]
#[command(author, version, about = "Generate compile_commands.json for the C files in a directory")]
struct Cli {
    /// Directory to scan and write into
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Config file (defaults to ccgen.toml in the scanned directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output file name
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Use this package prefix instead of running the query command
    #[arg(long)]
    prefix: Option<String>,

    /// Fail if the package prefix lookup fails
    #[arg(long)]
    strict: bool,

    /// Print the database instead of writing it
    #[arg(long)]
    stdout: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }

    fn load_config(&self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_file(path)
                .map_err(|e| miette!("Failed to load config {}: {}", path.display(), e))?,
            None => GeneratorConfig::load(&self.dir)
                .map_err(|e| miette!("Failed to load config from {}: {}", self.dir.display(), e))?,
        };

        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if self.strict {
            config.on_lookup_failure = LookupPolicy::Abort;
        }
        Ok(config)
    }

    fn resolver(&self, config: &GeneratorConfig) -> Result<Box<dyn PrefixResolver>> {
        match &self.prefix {
            Some(prefix) => Ok(Box::new(FixedPrefix(prefix.clone()))),
            None => {
                let query = PackageQuery::from_command_line(&config.query)
                    .map_err(|e| miette!("Invalid prefix query: {}", e))?;
                Ok(Box::new(query))
            }
        }
    }
}

fn generation_error(err: GenError, dir: &Path) -> miette::Report {
    match err {
        GenError::PrefixLookup { .. } => miette!("Failed to resolve include path: {}", err),
        _ => miette!("Failed to generate compile_commands.json in {}: {}", dir.display(), err),
    }
}

/// Write the database to its output file, or render it to `out` instead.
fn emit<R: PrefixResolver>(
    generator: &Generator<R>,
    dir: &Path,
    to_stdout: bool,
    out: &mut impl Write,
) -> Result<()> {
    if to_stdout {
        let json = generator
            .generate(dir)
            .and_then(|commands| commands.to_json_pretty())
            .map_err(|e| generation_error(e, dir))?;
        writeln!(out, "{}", json).map_err(|e| miette!("Failed to print database: {}", e))?;
    } else {
        let path = generator.run(dir).map_err(|e| generation_error(e, dir))?;
        log::debug!("database at {}", path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    let cli = Cli::parse();

    env_logger::Builder::new()
        .write_style(env_logger::WriteStyle::Auto)
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let config = cli.load_config()?;
    let resolver = cli.resolver(&config)?;
    let generator = Generator::new(config, resolver);

    emit(&generator, &cli.dir, cli.stdout, &mut std::io::stdout().lock())
}

//! compile_commands.json generation for flat C source directories.
//!
//! This crate provides:
//! - The compilation database format (`compile_commands.json`)
//! - Include prefix discovery through a package manager query
//! - Generator configuration (`ccgen.toml`)
//!
//! # Example
//!
//! ```toml
//! # ccgen.toml
//! directory = "/home/user/img-tools"
//! compiler = "gcc-14"
//! flags = ["-O3"]
//! package = "jpeg"
//! query = ["brew", "--prefix"]
//! on_lookup_failure = "proceed"
//! ```

mod compile_commands;
mod config;
mod discover;
mod error;
mod generator;
mod prefix;
mod template;

pub use compile_commands::{CompileCommand, CompileCommands};
pub use config::{GeneratorConfig, LookupPolicy, CONFIG_FILE_NAME};
pub use discover::find_sources;
pub use error::{GenError, Result};
pub use generator::Generator;
pub use prefix::{FixedPrefix, PackageQuery, PrefixLookup, PrefixResolver};
pub use template::{include_flag, CommandTemplate};

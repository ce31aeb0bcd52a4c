//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use classgen_core::ClassHierarchy;

pub mod expand;
pub mod query;

/// Default location of the hierarchy map, relative to the build directory.
pub const DEFAULT_HIERARCHY_PATH: &str = "../../class_hierarchy.json";

/// Class hierarchy template expander
#[derive(Parser)]
#[command(name = "classgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the class hierarchy JSON map
    #[arg(long, global = true, env = "CLASSGEN_HIERARCHY", default_value = DEFAULT_HIERARCHY_PATH)]
    pub hierarchy: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Expand templates: first half of FILES are templates, second half outputs
    Expand(expand::ExpandArgs),

    /// Print all descendants of a class
    Subclasses(query::SubclassesArgs),

    /// Print the include path for a header
    IncludePath(query::IncludePathArgs),
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Expand(args) => expand::execute(args, &self.hierarchy),
            Commands::Subclasses(args) => query::subclasses(args, &self.hierarchy),
            Commands::IncludePath(args) => query::include_path(args),
        }
    }
}

/// Load the hierarchy map, naming the path on failure.
pub fn load_hierarchy(path: &Path) -> Result<ClassHierarchy> {
    classgen_core::load_hierarchy(path)
        .with_context(|| format!("Failed to load class hierarchy from {}", path.display()))
}

//! Hierarchy inspection commands.

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

use crate::output;

#[derive(Args)]
pub struct SubclassesArgs {
    /// Class whose descendants are listed
    pub class_name: String,

    /// Print `#include` lines instead of a class list
    #[arg(long)]
    pub includes: bool,
}

#[derive(Args)]
pub struct IncludePathArgs {
    /// Header path to resolve
    pub path: PathBuf,
}

pub fn subclasses(args: SubclassesArgs, hierarchy_path: &Path) -> Result<()> {
    let hierarchy = super::load_hierarchy(hierarchy_path)?;

    if !hierarchy.contains(&args.class_name) {
        output::print_unknown_class(&args.class_name);
        return Ok(());
    }

    if args.includes {
        let lines = classgen_codegen::render_include_lines(&hierarchy, &args.class_name);
        output::print_include_lines(&lines);
    } else {
        let descendants = classgen_core::subclasses_of(&hierarchy, &args.class_name);
        output::print_descendants(&args.class_name, &descendants);
    }

    Ok(())
}

pub fn include_path(args: IncludePathArgs) -> Result<()> {
    println!("{}", classgen_core::resolve_include_path(&args.path));
    Ok(())
}

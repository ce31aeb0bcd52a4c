//! Template expansion command.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::debug;

use classgen_codegen::{ExpandConfig, GeneratedFile, DEFAULT_EXCLUDE_MARKER};

#[derive(Args)]
pub struct ExpandArgs {
    /// Template paths followed by the same number of output paths
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Skip templates whose path contains this substring
    #[arg(long, env = "CLASSGEN_EXCLUDE", default_value = DEFAULT_EXCLUDE_MARKER)]
    pub exclude: String,

    /// Preview without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Print the preview as JSON
    #[arg(long, requires = "dry_run")]
    pub json: bool,
}

pub fn execute(args: ExpandArgs, hierarchy_path: &Path) -> Result<()> {
    debug!(files = ?args.files, "Expand arguments");

    let hierarchy = super::load_hierarchy(hierarchy_path)?;
    let (templates, outputs) = classgen_codegen::split_arguments(&args.files);
    let config = ExpandConfig {
        exclude_marker: args.exclude,
    };

    let generated = classgen_codegen::expand_files(&hierarchy, templates, outputs, &config)
        .context("Failed to expand templates")?;

    if args.dry_run && args.json {
        println!("{}", serde_json::to_string_pretty(&generated)?);
        return Ok(());
    }

    if generated.is_empty() {
        println!("{}", "No templates to expand.".dimmed());
        return Ok(());
    }

    if args.dry_run {
        print_preview(&generated);
    } else {
        let written = classgen_codegen::write_generated(&generated)
            .context("Failed to write generated files")?;
        println!("{} Generated {} files:", "✓".green().bold(), written.len());
        for path in &written {
            println!("  {}", path);
        }
    }

    Ok(())
}

fn print_preview(generated: &[GeneratedFile]) {
    for file in generated {
        println!(
            "{} Would generate: {} (from {})",
            "→".dimmed(),
            file.output.display(),
            file.template.display()
        );
        println!("{}", "─".repeat(40));
        print!("{}", file.content);
        if !file.content.ends_with('\n') {
            println!();
        }
    }
}

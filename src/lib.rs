use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

pub mod document;
pub mod patch_set;

use document::{apply_patch, load_document, render_document, write_document};
use patch_set::{FLOWER_TYPES_CATEGORY, flower_types};

#[derive(Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Messages file to patch in place
    #[arg(default_value = "messages/ar.json")]
    pub file: PathBuf,

    /// Print the patched document to stdout instead of writing the file
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: Args) -> Result<()> {
    let mut doc = load_document(&args.file)?;
    let summary = apply_patch(&mut doc, FLOWER_TYPES_CATEGORY, flower_types())?;

    if args.dry_run {
        println!("{}", render_document(&doc)?);
        eprintln!(
            "🔍 Dry run: would update {} ({}), file left untouched",
            args.file.display(),
            summary
        );
        return Ok(());
    }

    write_document(&args.file, &doc)?;
    if summary.is_noop() {
        println!(
            "✅ {} already up to date ({})",
            args.file.display(),
            summary
        );
    } else {
        println!(
            "✅ Successfully updated {} ({})",
            args.file.display(),
            summary
        );
    }
    Ok(())
}

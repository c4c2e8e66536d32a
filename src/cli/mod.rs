//! Command-line interface for biodata-store.
//!
//! Every command loads a store definition (see [`crate::config`]) and runs one
//! query against it:
//!
//! - **files**: list files, optionally for one organism
//! - **file**: show one file by id
//! - **sequences**: list a file's native sequence dictionary
//! - **resolve**: resolve a sequence name against one file
//! - **find**: list every file containing a sequence
//! - **alias**: translate between alias and reference names
//!
//! ## Usage
//!
//! ```text
//! # List the Pf files with their derived labels
//! biodata-store --config store.json files --organism Pf
//!
//! # Which files contain chromosome 1, whatever they call it?
//! biodata-store --config store.json find chr1
//!
//! # JSON output for scripting
//! biodata-store --config store.json --format json sequences 0
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::StoreConfig;
use crate::core::file::BioDataFile;
use crate::registry::BioDataFileStore;

pub mod alias;
pub mod files;
pub mod sequences;

#[derive(Parser)]
#[command(name = "biodata-store")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Query alignment and variant files by organism, id and sequence name")]
#[command(
    long_about = "biodata-store indexes a set of alignment (SAM/BAM/CRAM) and variant (VCF) files.\n\nIt answers:\n- Which files belong to an organism\n- Which sequences a file records, under its own names\n- Which files contain a sequence, even when files name it differently (chr1 vs 1)"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Store definition (JSON)
    #[arg(short, long, global = true, env = "BIODATA_STORE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List files in the store
    Files(files::FilesArgs),

    /// Show a single file
    File(files::FileArgs),

    /// List the sequences recorded in a file
    Sequences(sequences::SequencesArgs),

    /// Resolve a sequence name against one file
    Resolve(sequences::ResolveArgs),

    /// Find every file containing a sequence
    Find(sequences::FindArgs),

    /// Translate between alias and reference names
    Alias(alias::AliasArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Load and build the store named on the command line
pub fn load_store(config: Option<&Path>) -> anyhow::Result<BioDataFileStore> {
    let path = config.ok_or_else(|| {
        anyhow::anyhow!("No store definition given: pass --config or set BIODATA_STORE_CONFIG")
    })?;
    debug!(config = %path.display(), "Loading store definition");
    Ok(StoreConfig::load_from_file(path)?.into_store()?)
}

pub(crate) fn print_files_text(files: &[&BioDataFile]) {
    println!("{:<6} {:<12} {:<10} {:<30} Path", "ID", "Organism", "Kind", "Label");
    println!("{}", "-".repeat(90));
    for file in files {
        println!(
            "{:<6} {:<12} {:<10} {:<30} {}",
            file.file_id,
            file.organism,
            file.kind.to_string(),
            file.display_label(),
            file.path
        );
    }
}

pub(crate) fn print_files_tsv(files: &[&BioDataFile]) {
    println!("file_id\torganism\tkind\tlabel\tpath");
    for file in files {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            file.file_id,
            file.organism,
            file.kind,
            file.display_label(),
            file.path
        );
    }
}

pub(crate) fn print_files(files: &[&BioDataFile], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            if files.is_empty() {
                println!("No files found");
            } else {
                print_files_text(files);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(files)?),
        OutputFormat::Tsv => print_files_tsv(files),
    }
    Ok(())
}

use clap::Args;

use crate::cli::{print_files, OutputFormat};
use crate::core::types::FileId;
use crate::registry::BioDataFileStore;

#[derive(Args)]
pub struct FilesArgs {
    /// Only list files for this organism (exact match)
    #[arg(long)]
    pub organism: Option<String>,
}

#[derive(Args)]
pub struct FileArgs {
    /// File id
    #[arg(required = true)]
    pub file_id: FileId,
}

pub fn run_list(args: FilesArgs, store: &BioDataFileStore, format: OutputFormat) -> anyhow::Result<()> {
    let files = match &args.organism {
        Some(organism) => store.list_for_organism(organism),
        None => store.files().iter().collect(),
    };
    print_files(&files, format)
}

pub fn run_show(args: FileArgs, store: &BioDataFileStore, format: OutputFormat) -> anyhow::Result<()> {
    let Some(file) = store.get_file(args.file_id) else {
        match format {
            OutputFormat::Json => println!("null"),
            OutputFormat::Text | OutputFormat::Tsv => {
                println!("File {} not found ({} files in store)", args.file_id, store.len());
            }
        }
        return Ok(());
    };

    match format {
        OutputFormat::Text => {
            println!("File {}", file.file_id);
            println!("  Path: {}", file.path);
            println!("  Organism: {}", file.organism);
            println!("  Kind: {}", file.kind);
            println!("  Label: {}", file.display_label());
        }
        _ => print_files(&[file], format)?,
    }
    Ok(())
}

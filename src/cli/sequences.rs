use clap::Args;

use crate::cli::{print_files, OutputFormat};
use crate::core::types::FileId;
use crate::registry::BioDataFileStore;

#[derive(Args)]
pub struct SequencesArgs {
    /// File id
    #[arg(required = true)]
    pub file_id: FileId,
}

#[derive(Args)]
pub struct ResolveArgs {
    /// File id
    #[arg(required = true)]
    pub file_id: FileId,

    /// Sequence name or alias
    #[arg(required = true)]
    pub name: String,
}

#[derive(Args)]
pub struct FindArgs {
    /// Sequence name or alias
    #[arg(required = true)]
    pub name: String,
}

pub fn run_sequences(
    args: SequencesArgs,
    store: &BioDataFileStore,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let Some(sequences) = store.sequences_for_file(args.file_id)? else {
        match format {
            OutputFormat::Json => println!("null"),
            OutputFormat::Text | OutputFormat::Tsv => {
                println!("File {} not found ({} files in store)", args.file_id, store.len());
            }
        }
        return Ok(());
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(sequences.as_slice())?),
        OutputFormat::Text | OutputFormat::Tsv => {
            let sep = if matches!(format, OutputFormat::Tsv) { "\t" } else { "  " };
            println!("name{sep}length{sep}index");
            for sequence in sequences.iter() {
                let length = sequence.length.map(|l| l.to_string()).unwrap_or_default();
                let index = sequence.index.map(|i| i.to_string()).unwrap_or_default();
                println!("{}{sep}{length}{sep}{index}", sequence.name);
            }
        }
    }
    Ok(())
}

pub fn run_resolve(
    args: ResolveArgs,
    store: &BioDataFileStore,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let resolved = store.resolve_sequence_name(args.file_id, &args.name)?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "file_id": args.file_id,
                "query": args.name,
                "resolved": resolved,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("file_id\tquery\tresolved");
            println!(
                "{}\t{}\t{}",
                args.file_id,
                args.name,
                resolved.as_deref().unwrap_or("")
            );
        }
        OutputFormat::Text => match resolved {
            Some(name) => println!("{} -> {name} (file {})", args.name, args.file_id),
            None => println!("{} not found in file {}", args.name, args.file_id),
        },
    }
    Ok(())
}

pub fn run_find(args: FindArgs, store: &BioDataFileStore, format: OutputFormat) -> anyhow::Result<()> {
    let files = store.list_for_sequence(&args.name)?;
    print_files(&files, format)
}

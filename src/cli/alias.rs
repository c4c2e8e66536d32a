use clap::Args;

use crate::cli::OutputFormat;
use crate::registry::BioDataFileStore;

#[derive(Args)]
pub struct AliasArgs {
    /// Name to translate
    #[arg(required = true)]
    pub name: String,

    /// Translate a reference name back to its first alias
    #[arg(long)]
    pub reverse: bool,
}

pub fn run(args: AliasArgs, store: &BioDataFileStore, format: OutputFormat) -> anyhow::Result<()> {
    let translated = if args.reverse {
        store.reference_to_alias(&args.name)
    } else {
        store.alias_to_reference(&args.name)
    };

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "query": args.name,
                "reverse": args.reverse,
                "name": translated,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => println!("{}\t{translated}", args.name),
        OutputFormat::Text => println!("{translated}"),
    }
    Ok(())
}

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod core;
mod parsing;
mod registry;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("biodata_store=debug,info")
    } else {
        EnvFilter::new("biodata_store=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let store = cli::load_store(cli.config.as_deref())?;

    match cli.command {
        cli::Commands::Files(args) => cli::files::run_list(args, &store, cli.format)?,
        cli::Commands::File(args) => cli::files::run_show(args, &store, cli.format)?,
        cli::Commands::Sequences(args) => {
            cli::sequences::run_sequences(args, &store, cli.format)?;
        }
        cli::Commands::Resolve(args) => cli::sequences::run_resolve(args, &store, cli.format)?,
        cli::Commands::Find(args) => cli::sequences::run_find(args, &store, cli.format)?,
        cli::Commands::Alias(args) => cli::alias::run(args, &store, cli.format)?,
    }

    Ok(())
}

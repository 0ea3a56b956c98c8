//! Ithkuil CLI: the `ithkuil` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let config = support::load_config_or_exit(cli.config.as_deref());

    let default_filter = if cli.verbose {
        "debug"
    } else {
        config.log.as_deref().unwrap_or("warn")
    };
    init_tracing(default_filter);

    let lexicon = support::load_lexicon_or_exit(cli.lexicon.or(config.lexicon).as_deref());

    match cli.command {
        Commands::Generate { input, json } => commands::generate::run(&input, &lexicon, json),
        Commands::Parse { words, json } => commands::parse::run(&words, json),
        Commands::Sentence { text, json } => commands::sentence::run(&text, json),
        Commands::Roundtrip { words, json } => commands::roundtrip::run(&words, &lexicon, json),
        Commands::Phonotactics { clusters, json } => commands::phonotactics::run(&clusters, json),
    }
}

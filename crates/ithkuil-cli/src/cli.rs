use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "ithkuil",
    about = "Ithkuil: generate and parse formatives and adjuncts",
    version
)]
pub struct Cli {
    /// Root/affix dictionary (.json, .jsonl or .toml) for numbered roots
    #[arg(long, global = true)]
    pub lexicon: Option<PathBuf>,

    /// TOML config file naming a lexicon and a log filter
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a word from a JSON description
    Generate {
        /// Partial formative or adjunct as JSON (`-` reads stdin)
        input: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse words into their grammatical values
    Parse {
        /// Words to parse, stress marks included
        #[arg(required = true)]
        words: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse running text, reporting each word on its own
    Sentence {
        /// Text to parse (`-` reads stdin)
        text: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse words and generate them again, checking they come back unchanged
    Roundtrip {
        #[arg(required = true)]
        words: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check where consonant clusters may stand in a word
    Phonotactics {
        #[arg(required = true)]
        clusters: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

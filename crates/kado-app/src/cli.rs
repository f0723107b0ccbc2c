use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "kado", version, about = "Inspect flashcard language configs and word lists")]
pub struct Cli {
    /// Root of the languages tree (overrides KADO_LANGUAGES_DIR)
    #[arg(long, global = true)]
    pub languages_dir: Option<PathBuf>,

    /// Fail when a configured shared word list is missing
    #[arg(long, global = true)]
    pub strict_shared: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List languages with a config.json
    List,
    /// Print a language config
    Show {
        lang_id: String,
        /// Print every field, including level_filter and shared_words_path
        #[arg(long)]
        full: bool,
    },
    /// Load a language's word list
    Words {
        lang_id: String,
        /// Number of entries to print
        #[arg(long, default_value_t = 5)]
        limit: usize,
        /// Ignore the config's level_filter
        #[arg(long)]
        no_filter: bool,
    },
}

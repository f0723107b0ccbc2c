use std::io;

use anyhow::Result;
use clap::Parser;
use kado_config::{LanguagesDir, Settings};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use self::cli::{Cli, Command};
use self::commands::App;

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let settings = Settings::new();
    init_tracing(settings.log_json);

    let cli = Cli::parse();
    let app = App {
        languages: LanguagesDir::new(cli.languages_dir.unwrap_or(settings.languages_dir)),
        strict_shared: cli.strict_shared || settings.strict_shared_words,
    };

    let mut out = io::stdout().lock();
    match cli.command {
        Command::List => app.list(&mut out),
        Command::Show { lang_id, full } => app.show(&lang_id, full, &mut out),
        Command::Words {
            lang_id,
            limit,
            no_filter,
        } => app.words(&lang_id, limit, no_filter, &mut out),
    }
}

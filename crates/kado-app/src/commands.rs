use std::io::Write;

use anyhow::{Context, Result};
use kado_config::{LanguageConfig, LanguagesDir};
use kado_core::WordEntry;
use kado_lang_japanese::LevelFilter;
use kado_words::WordListLoader;

pub struct App {
    pub languages: LanguagesDir,
    pub strict_shared: bool,
}

impl App {
    pub fn list(&self, out: &mut impl Write) -> Result<()> {
        let ids = self
            .languages
            .discover()
            .with_context(|| format!("Failed to scan {}", self.languages.root().display()))?;

        for id in ids {
            match self.languages.load_config(&id) {
                Ok(config) => writeln!(out, "{}\t{}", config.lang_id, config.lang_name)?,
                Err(e) => tracing::warn!("Skipping {id}: {e}"),
            }
        }
        Ok(())
    }

    pub fn show(&self, lang_id: &str, full: bool, out: &mut impl Write) -> Result<()> {
        let config = self.config(lang_id)?;
        let rendered = if full {
            serde_json::to_string_pretty(&config)?
        } else {
            serde_json::to_string_pretty(&config.to_dict())?
        };
        writeln!(out, "{rendered}")?;
        Ok(())
    }

    pub fn words(
        &self,
        lang_id: &str,
        limit: usize,
        no_filter: bool,
        out: &mut impl Write,
    ) -> Result<()> {
        let config = self.config(lang_id)?;
        let loader = WordListLoader::for_language(&self.languages, &config)
            .with_strict_shared(self.strict_shared);

        let (source, words) = loader
            .load_json_with_source()
            .with_context(|| format!("Failed to load word list for {lang_id}"))?;
        let total = words.len();

        let words = if no_filter {
            words
        } else {
            apply_level_filter(&config, words)
        };

        writeln!(
            out,
            "{} ({}): {} of {} words, source {}",
            config.lang_name,
            config.level_filter,
            words.len(),
            total,
            source.display()
        )?;
        for entry in words.iter().take(limit) {
            writeln!(out, "{entry}")?;
        }
        Ok(())
    }

    fn config(&self, lang_id: &str) -> Result<LanguageConfig> {
        self.languages
            .load_config(lang_id)
            .with_context(|| format!("Failed to load config for {lang_id}"))
    }
}

fn apply_level_filter(config: &LanguageConfig, words: Vec<WordEntry>) -> Vec<WordEntry> {
    match LevelFilter::parse(&config.level_filter) {
        Ok(LevelFilter::All) => words,
        Ok(filter) => filter.apply(&words),
        Err(e) => {
            tracing::warn!("{e} in config for {}, keeping all words", config.lang_id);
            words
        }
    }
}

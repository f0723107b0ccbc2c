use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use kado_config::{LanguageConfig, LanguagesDir};
use kado_core::{LoadError, WordEntry};
use serde_json::Value;

/// Entries inspected by [`validate_data`]
const VALIDATION_SAMPLE: usize = 10;

/// Check that `data` is a non-empty array whose leading entries are objects.
///
/// Only the first ten entries are inspected. Field-level checks belong to the
/// card handlers that consume the entries.
pub fn validate_data(data: &Value) -> bool {
    let Some(entries) = data.as_array() else {
        return false;
    };
    if entries.is_empty() {
        return false;
    }

    entries
        .iter()
        .take(VALIDATION_SAMPLE)
        .all(Value::is_object)
}

/// Loads a language's word list, preferring a shared list when one is configured
#[derive(Debug, Clone)]
pub struct WordListLoader {
    data_path: PathBuf,
    shared_words_path: Option<String>,
    strict_shared: bool,
}

impl WordListLoader {
    /// `shared_words_path` is relative to the `languages` directory, which is
    /// taken to be two levels above `data_path` (`languages/{lang_id}/words.json`).
    pub fn new(data_path: impl Into<PathBuf>, shared_words_path: Option<String>) -> Self {
        Self {
            data_path: data_path.into(),
            shared_words_path,
            strict_shared: false,
        }
    }

    /// Loader for `languages/{lang_id}/words.json` honouring the config's shared list
    pub fn for_language(dir: &LanguagesDir, config: &LanguageConfig) -> Self {
        Self::new(
            dir.words_path(&config.lang_id),
            config.shared_words_path.clone(),
        )
    }

    /// Make a configured but missing shared list an error instead of a fallback
    pub fn with_strict_shared(mut self, strict: bool) -> Self {
        self.strict_shared = strict;
        self
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn shared_words_path(&self) -> Option<&str> {
        self.shared_words_path.as_deref()
    }

    fn shared_candidate(&self) -> Option<PathBuf> {
        let shared = self.shared_words_path.as_deref().filter(|p| !p.is_empty())?;
        let languages_root = self
            .data_path
            .parent()
            .and_then(Path::parent)
            .unwrap_or_else(|| Path::new(""));
        Some(languages_root.join(shared))
    }

    /// The file that will actually be read.
    ///
    /// A shared list that does not exist falls back to `data_path` without error.
    pub fn resolve_target_path(&self) -> PathBuf {
        if let Some(candidate) = self.shared_candidate() {
            if candidate.exists() {
                return candidate;
            }
            tracing::debug!(
                "Shared word list {} not found, using {}",
                candidate.display(),
                self.data_path.display()
            );
        }
        self.data_path.clone()
    }

    /// Like [`resolve_target_path`](Self::resolve_target_path), but in strict mode a
    /// missing shared list is reported as [`LoadError::NotFound`].
    pub fn try_resolve_target_path(&self) -> Result<PathBuf, LoadError> {
        if self.strict_shared
            && let Some(candidate) = self.shared_candidate()
            && !candidate.exists()
        {
            return Err(LoadError::NotFound(candidate));
        }
        Ok(self.resolve_target_path())
    }

    /// Read, parse and validate the word list. Every call goes back to disk.
    pub fn load_json(&self) -> Result<Vec<WordEntry>, LoadError> {
        self.load_json_with_source().map(|(_, entries)| entries)
    }

    /// [`load_json`](Self::load_json), also returning the file that was read
    pub fn load_json_with_source(&self) -> Result<(PathBuf, Vec<WordEntry>), LoadError> {
        let target = self.try_resolve_target_path()?;
        if !target.exists() {
            return Err(LoadError::NotFound(target));
        }

        let file = File::open(&target)?;
        let data: Value = serde_json::from_reader(BufReader::new(file))?;

        let valid = self.validate(&data);
        match data {
            Value::Array(entries) if valid => {
                tracing::info!("Loaded {} words from {}", entries.len(), target.display());
                Ok((target, entries))
            }
            _ => Err(LoadError::InvalidFormat(self.data_path.clone())),
        }
    }

    pub fn validate(&self, data: &Value) -> bool {
        validate_data(data)
    }

    /// CSV word lists are not supported yet
    pub fn load_csv(&self, delimiter: char) -> Result<Vec<WordEntry>, LoadError> {
        Err(LoadError::NotSupported(format!(
            "CSV word lists (delimiter {delimiter:?}) for {}",
            self.data_path.display()
        )))
    }
}

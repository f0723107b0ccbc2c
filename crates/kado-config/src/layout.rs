use std::fs;
use std::path::{Path, PathBuf};

use kado_core::LoadError;

use crate::language::LanguageConfig;

const CONFIG_FILE: &str = "config.json";
const WORDS_FILE: &str = "words.json";

/// The `languages/` directory: one subdirectory per language holding
/// `config.json` and `words.json`, plus any shared word lists.
#[derive(Debug, Clone)]
pub struct LanguagesDir {
    root: PathBuf,
}

impl LanguagesDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self, lang_id: &str) -> PathBuf {
        self.root.join(lang_id).join(CONFIG_FILE)
    }

    pub fn words_path(&self, lang_id: &str) -> PathBuf {
        self.root.join(lang_id).join(WORDS_FILE)
    }

    /// Ids of every subdirectory that carries a config file, sorted
    pub fn discover(&self) -> Result<Vec<String>, LoadError> {
        if !self.root.is_dir() {
            return Err(LoadError::NotFound(self.root.clone()));
        }

        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_dir() || !path.join(CONFIG_FILE).is_file() {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                ids.push(name.to_string());
            }
        }
        ids.sort();

        tracing::debug!("Discovered {} languages in {}", ids.len(), self.root.display());
        Ok(ids)
    }

    pub fn load_config(&self, lang_id: &str) -> Result<LanguageConfig, LoadError> {
        LanguageConfig::load(&self.config_path(lang_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(root: &Path, lang_id: &str) {
        let dir = root.join(lang_id);
        fs::create_dir_all(&dir).unwrap();
        let json = format!(
            r#"{{"lang_id": "{lang_id}", "lang_name": "{lang_id}", "fonts": {{}}, "styles": {{}}}}"#
        );
        fs::write(dir.join(CONFIG_FILE), json).unwrap();
    }

    #[test]
    fn test_paths() {
        let dir = LanguagesDir::new("languages");
        assert_eq!(dir.config_path("ja"), Path::new("languages/ja/config.json"));
        assert_eq!(dir.words_path("ja"), Path::new("languages/ja/words.json"));
    }

    #[test]
    fn test_discover_sorted_and_skips_non_languages() {
        let tmp = tempfile::tempdir().unwrap();
        write_config(tmp.path(), "ko");
        write_config(tmp.path(), "ja");
        fs::create_dir_all(tmp.path().join("shared")).unwrap();
        fs::write(tmp.path().join("shared/common_words.json"), "[]").unwrap();
        fs::write(tmp.path().join("README.txt"), "").unwrap();

        let dir = LanguagesDir::new(tmp.path());
        assert_eq!(dir.discover().unwrap(), vec!["ja", "ko"]);
    }

    #[test]
    fn test_discover_missing_root() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = LanguagesDir::new(tmp.path().join("nope"));
        assert!(matches!(dir.discover(), Err(LoadError::NotFound(_))));
    }

    #[test]
    fn test_load_config() {
        let tmp = tempfile::tempdir().unwrap();
        write_config(tmp.path(), "ja");

        let dir = LanguagesDir::new(tmp.path());
        let config = dir.load_config("ja").unwrap();
        assert_eq!(config.lang_id, "ja");
        assert!(matches!(dir.load_config("zh"), Err(LoadError::NotFound(_))));
    }
}

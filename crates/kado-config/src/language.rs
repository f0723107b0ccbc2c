use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use kado_core::{CardSize, LoadError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

fn default_level_filter() -> String {
    "all".to_string()
}

/// Per-language (or per card type) settings, read from `languages/{lang_id}/config.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageConfig {
    pub lang_id: String,
    pub lang_name: String,
    /// Font role -> font name or path
    pub fonts: HashMap<String, String>,
    pub styles: HashMap<String, Value>,
    #[serde(default)]
    pub card_size: CardSize,
    #[serde(default)]
    pub theme_colors: Vec<String>,
    /// JLPT level tag, interpreted by the language crates
    #[serde(default = "default_level_filter")]
    pub level_filter: String,
    /// Shared word list, relative to the `languages` directory
    #[serde(default)]
    pub shared_words_path: Option<String>,
}

impl LanguageConfig {
    /// Load a config file
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        if !path.exists() {
            return Err(LoadError::NotFound(path.to_path_buf()));
        }

        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config: Self = serde_json::from_reader(reader)?;

        tracing::info!("Loaded language config '{}' from {}", config.lang_id, path.display());
        Ok(config)
    }

    /// Parse a config document held in memory
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Plain mapping for handing the record to renderers.
    ///
    /// `level_filter` and `shared_words_path` are not part of this projection;
    /// serialize the record itself when the full set of fields is needed.
    pub fn to_dict(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("lang_id".into(), json!(self.lang_id));
        map.insert("lang_name".into(), json!(self.lang_name));
        map.insert("fonts".into(), json!(self.fonts));
        map.insert("styles".into(), json!(self.styles));
        map.insert(
            "card_size".into(),
            json!([self.card_size.width(), self.card_size.height()]),
        );
        map.insert("theme_colors".into(), json!(self.theme_colors));
        map
    }
}

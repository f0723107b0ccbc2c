use std::env;
use std::path::PathBuf;

fn default_languages_dir() -> PathBuf {
    PathBuf::from("languages")
}

fn parse_flag(value: Option<String>) -> bool {
    value.is_some_and(|v| {
        let v = v.trim();
        v == "1" || v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("yes")
    })
}

/// Runtime settings for the loaders and the binary
#[derive(Debug, Clone)]
pub struct Settings {
    /// Root of the `languages/` tree
    pub languages_dir: PathBuf,
    /// Fail instead of falling back when a configured shared word list is missing
    pub strict_shared_words: bool,
    /// Emit logs as JSON lines
    pub log_json: bool,
}

impl Settings {
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let languages_dir = lookup("KADO_LANGUAGES_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_languages_dir);

        Self {
            languages_dir,
            strict_shared_words: parse_flag(lookup("KADO_STRICT_SHARED_WORDS")),
            log_json: parse_flag(lookup("KADO_LOG_JSON")),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            languages_dir: default_languages_dir(),
            strict_shared_words: false,
            log_json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = Settings::from_lookup(|_| None);
        assert_eq!(settings.languages_dir, PathBuf::from("languages"));
        assert!(!settings.strict_shared_words);
        assert!(!settings.log_json);
    }

    #[test]
    fn test_values_from_lookup() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("KADO_LANGUAGES_DIR", "/srv/cards/languages"),
            ("KADO_STRICT_SHARED_WORDS", "1"),
            ("KADO_LOG_JSON", "true"),
        ]));
        assert_eq!(settings.languages_dir, PathBuf::from("/srv/cards/languages"));
        assert!(settings.strict_shared_words);
        assert!(settings.log_json);
    }

    #[test]
    fn test_flags_ignore_case() {
        for value in ["YES", "Yes", "yes", "TRUE", "tRuE", " 1 "] {
            assert!(parse_flag(Some(value.to_string())), "{value}");
        }
        assert!(!parse_flag(Some("0".into())));
        assert!(!parse_flag(Some("no".into())));
        assert!(!parse_flag(None));
    }

    #[test]
    fn test_blank_dir_and_unknown_flag() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("KADO_LANGUAGES_DIR", "  "),
            ("KADO_STRICT_SHARED_WORDS", "maybe"),
        ]));
        assert_eq!(settings.languages_dir, PathBuf::from("languages"));
        assert!(!settings.strict_shared_words);
    }
}

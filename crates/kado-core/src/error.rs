use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid word list format: {}", .0.display())]
    InvalidFormat(PathBuf),

    #[error("Not supported: {0}")]
    NotSupported(String),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_path() {
        let err = LoadError::NotFound(PathBuf::from("languages/ja/config.json"));
        assert_eq!(err.to_string(), "File not found: languages/ja/config.json");
    }

    #[test]
    fn test_parse_error_converts() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: LoadError = parse.into();
        assert!(matches!(err, LoadError::Parse(_)));
    }
}

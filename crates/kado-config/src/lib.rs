pub mod language;
pub mod layout;
pub mod settings;

pub use language::LanguageConfig;
pub use layout::LanguagesDir;
pub use settings::Settings;

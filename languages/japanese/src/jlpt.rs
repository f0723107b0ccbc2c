use std::collections::BTreeSet;

use kado_core::WordEntry;
use unicode_normalization::UnicodeNormalization;

/// Entry fields checked, in order, for a JLPT level tag
const LEVEL_FIELDS: [&str; 2] = ["level", "jlpt"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum JlptLevel {
    N5, // Beginner (~800 words)
    N4, // Elementary (~1500 words)
    N3, // Intermediate (~3750 words)
    N2, // Upper intermediate (~6000 words)
    N1, // Advanced (~10000 words)
}

impl JlptLevel {
    /// Parse level from string. Accepts full-width forms like `Ｎ５`.
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized: String = s.trim().nfkc().collect();
        match normalized.to_uppercase().as_str() {
            "N5" => Some(JlptLevel::N5),
            "N4" => Some(JlptLevel::N4),
            "N3" => Some(JlptLevel::N3),
            "N2" => Some(JlptLevel::N2),
            "N1" => Some(JlptLevel::N1),
            _ => None,
        }
    }

    /// Get level string
    pub fn as_str(&self) -> &'static str {
        match self {
            JlptLevel::N5 => "N5",
            JlptLevel::N4 => "N4",
            JlptLevel::N3 => "N3",
            JlptLevel::N2 => "N2",
            JlptLevel::N1 => "N1",
        }
    }

    /// Get level description
    pub fn description(&self) -> &'static str {
        match self {
            JlptLevel::N5 => "N5 (Beginner)",
            JlptLevel::N4 => "N4 (Elementary)",
            JlptLevel::N3 => "N3 (Intermediate)",
            JlptLevel::N2 => "N2 (Upper Intermediate)",
            JlptLevel::N1 => "N1 (Advanced)",
        }
    }

    /// Level tag of a word entry, if it carries one
    pub fn of_entry(entry: &WordEntry) -> Option<Self> {
        LEVEL_FIELDS
            .iter()
            .filter_map(|field| entry.get(field).and_then(|v| v.as_str()))
            .find_map(JlptLevel::from_str)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LevelFilterError {
    #[error("Unknown JLPT level: {0}")]
    UnknownLevel(String),
}

/// Interpretation of a language config's `level_filter`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelFilter {
    All,
    Levels(BTreeSet<JlptLevel>),
}

impl LevelFilter {
    /// `"all"` (or blank) keeps everything, otherwise a list such as `"N5"` or `"N5,N4"`
    pub fn parse(s: &str) -> Result<Self, LevelFilterError> {
        let normalized: String = s.nfkc().collect();
        let normalized = normalized.trim();

        if normalized.is_empty() || normalized.eq_ignore_ascii_case("all") {
            return Ok(LevelFilter::All);
        }

        let mut levels = BTreeSet::new();
        for token in normalized
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let level = JlptLevel::from_str(token)
                .ok_or_else(|| LevelFilterError::UnknownLevel(token.to_string()))?;
            levels.insert(level);
        }

        if levels.is_empty() {
            return Err(LevelFilterError::UnknownLevel(normalized.to_string()));
        }

        Ok(LevelFilter::Levels(levels))
    }

    pub fn matches(&self, level: Option<JlptLevel>) -> bool {
        match self {
            LevelFilter::All => true,
            LevelFilter::Levels(levels) => level.is_some_and(|l| levels.contains(&l)),
        }
    }

    /// Entries passing the filter, in their original order
    pub fn apply(&self, entries: &[WordEntry]) -> Vec<WordEntry> {
        let kept: Vec<WordEntry> = entries
            .iter()
            .filter(|entry| self.matches(JlptLevel::of_entry(entry)))
            .cloned()
            .collect();

        tracing::debug!("Level filter kept {} of {} entries", kept.len(), entries.len());
        kept
    }
}

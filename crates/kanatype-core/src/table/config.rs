use std::collections::BTreeMap;

use serde::Deserialize;

/// A table value is either one spelling or a list of spellings.
/// Normalized to a list at the parse boundary so matching logic never
/// sees the single-string form.
#[derive(Deserialize)]
#[serde(untagged)]
enum SpellingValue {
    One(String),
    Many(Vec<String>),
}

#[derive(Deserialize)]
struct TableConfig {
    spellings: BTreeMap<String, SpellingValue>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[spellings] table is empty")]
    Empty,
    #[error("no candidates for kana: {0}")]
    NoCandidates(String),
    #[error("empty candidate for kana: {0}")]
    EmptyCandidate(String),
    #[error("non-ASCII candidate {1:?} for kana: {0}")]
    NonAsciiCandidate(String, String),
    #[error("conversion table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a sorted `BTreeMap<kana, candidate spellings>`.
pub fn parse_table_toml(
    toml_str: &str,
) -> Result<BTreeMap<String, Vec<String>>, TableConfigError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableConfigError::Parse(e.to_string()))?;

    if config.spellings.is_empty() {
        return Err(TableConfigError::Empty);
    }

    let mut map = BTreeMap::new();
    for (kana, value) in config.spellings {
        let candidates = match value {
            SpellingValue::One(s) => vec![s],
            SpellingValue::Many(v) => v,
        };
        if candidates.is_empty() {
            return Err(TableConfigError::NoCandidates(kana));
        }
        for candidate in &candidates {
            if candidate.is_empty() {
                return Err(TableConfigError::EmptyCandidate(kana));
            }
            if !candidate.is_ascii() {
                return Err(TableConfigError::NonAsciiCandidate(kana, candidate.clone()));
            }
        }
        map.insert(kana, candidates);
    }
    Ok(map)
}

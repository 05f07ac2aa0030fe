//! Kana→romanization conversion table.
//!
//! Maps a single kana unit (or kana digraph like しゃ) to its acceptable
//! Latin spellings, and segments a raw target string into the units the
//! table keys are defined over. Built once per process from TOML data and
//! shared read-only across all sessions.

mod config;
mod data;

pub use config::{parse_table_toml, TableConfigError};

use std::collections::BTreeMap;
use std::sync::OnceLock;

use tracing::warn;

use crate::unicode::katakana_to_hiragana;
use data::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

pub struct ConversionTable {
    map: BTreeMap<String, Vec<String>>,
}

impl ConversionTable {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), TableConfigError> {
        // Validate eagerly
        parse_table_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| TableConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static ConversionTable {
        static INSTANCE: OnceLock<ConversionTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            Self::from_toml(toml_str).expect("conversion table TOML must be valid")
        })
    }

    /// Build a standalone table, bypassing the singleton.
    pub fn from_toml(toml_str: &str) -> Result<Self, TableConfigError> {
        let map = parse_table_toml(toml_str)?;
        Ok(ConversionTable { map })
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Look up the candidate spellings for one kana unit.
    /// Katakana units are folded to hiragana before lookup.
    pub fn lookup(&self, kana: &str) -> Option<&[String]> {
        if let Some(c) = self.map.get(kana) {
            return Some(c.as_slice());
        }
        self.map
            .get(&katakana_to_hiragana(kana))
            .map(|c| c.as_slice())
    }

    /// Candidate spellings with the graceful-degradation fallback: a unit
    /// absent from the table becomes its own single candidate, so an
    /// unknown character never fails — it is just untypable through
    /// ordinary Latin keys.
    pub fn candidates_for(&self, kana: &str) -> Vec<String> {
        match self.lookup(kana) {
            Some(c) => c.to_vec(),
            None => {
                warn!(unit = kana, "no table entry, falling back to literal");
                vec![kana.to_string()]
            }
        }
    }

    /// Split a target string into the kana units the table is keyed over,
    /// preferring two-character digraph entries (きゃ, しょ, ...) where they
    /// exist. Units keep their original text; folding happens at lookup.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut units = Vec::new();
        let mut i = 0;
        while i < chars.len() {
            if i + 1 < chars.len() {
                let pair: String = chars[i..=i + 1].iter().collect();
                if self.lookup(&pair).is_some() {
                    units.push(pair);
                    i += 2;
                    continue;
                }
            }
            units.push(chars[i].to_string());
            i += 1;
        }
        units
    }
}

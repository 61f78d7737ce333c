//! ISO 639-2 language code resolution.
//!
//! The built-in table is compiled into the library from
//! `data/iso_639_2.json` and parsed once on first use. Callers may load a
//! replacement table from disk with [`LanguageTable::from_path`].

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;

use crate::error::{CoreError, CoreResult};

const BUILTIN_TABLE_JSON: &str = include_str!("../../data/iso_639_2.json");

static BUILTIN: Lazy<LanguageTable> = Lazy::new(|| {
    LanguageTable::from_json(BUILTIN_TABLE_JSON).unwrap_or_else(|e| {
        log::error!("Built-in language table is unusable: {e}");
        LanguageTable::default()
    })
});

/// Mapping from three-letter language codes to English language names.
#[derive(Debug, Clone, Default)]
pub struct LanguageTable {
    names: HashMap<String, String>,
}

impl LanguageTable {
    /// The table shipped with the library.
    #[must_use]
    pub fn builtin() -> &'static LanguageTable {
        &BUILTIN
    }

    /// Parses a JSON object of `"code": "Name"` pairs.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let names: HashMap<String, String> = serde_json::from_str(json)
            .map_err(|e| CoreError::LanguageTable(format!("invalid JSON object: {e}")))?;
        Ok(Self { names })
    }

    /// Loads a table from a JSON file on disk.
    pub fn from_path(path: &Path) -> CoreResult<Self> {
        let json = fs::read_to_string(path)
            .map_err(|e| CoreError::LanguageTable(format!("{}: {e}", path.display())))?;
        let table = Self::from_json(&json)
            .map_err(|e| CoreError::LanguageTable(format!("{}: {e}", path.display())))?;
        log::debug!(
            "Loaded {} language codes from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Looks up a language code. Codes are matched exactly.
    #[must_use]
    pub fn resolve(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    /// Looks up a language code, falling back to `"Unknown"`.
    #[must_use]
    pub fn name_or_unknown(&self, code: Option<&str>) -> String {
        code.and_then(|c| self.resolve(c))
            .unwrap_or("Unknown")
            .to_string()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

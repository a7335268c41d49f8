//! Result catalog: narrative content for each type code.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ContentError;
use crate::personality::TypeCode;

/// A named companion type with a short explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchNote {
    pub name: String,
    pub description: String,
}

/// Best and worst companions for a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matches {
    pub best: MatchNote,
    pub worst: MatchNote,
}

/// Content shown on the result screen for one type code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEntry {
    /// Display name of the persona, also the label recorded for the outcome.
    pub title: String,
    #[serde(default)]
    pub hashtags: Vec<String>,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub likes: Option<Vec<String>>,
    #[serde(default)]
    pub dislikes: Option<Vec<String>>,
    #[serde(default)]
    pub matches: Option<Matches>,
    /// Path or URL of an illustration, if one exists.
    #[serde(default)]
    pub illustration: Option<String>,
}

impl ResultEntry {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            hashtags: Vec::new(),
            description: Vec::new(),
            likes: None,
            dislikes: None,
            matches: None,
            illustration: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawCatalog {
    default: TypeCode,
    #[serde(default)]
    types: BTreeMap<TypeCode, ResultEntry>,
}

/// Read-only mapping from type code to result content, with a fallback entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCatalog {
    entries: BTreeMap<TypeCode, ResultEntry>,
    default: TypeCode,
}

impl ResultCatalog {
    /// Build a catalog; `default` must have an entry.
    pub fn new(
        entries: BTreeMap<TypeCode, ResultEntry>,
        default: TypeCode,
    ) -> Result<Self, ContentError> {
        if !entries.contains_key(&default) {
            return Err(ContentError::MissingDefault(default));
        }
        let catalog = Self { entries, default };
        let missing = catalog.missing_codes();
        if !missing.is_empty() {
            let missing: Vec<String> = missing.iter().map(ToString::to_string).collect();
            warn!(missing = ?missing, "Result catalog is incomplete, missing codes fall back to {}", default);
        }
        Ok(catalog)
    }

    /// Parse a catalog from TOML: a top-level `default` code and `[types.XXXX]` tables.
    pub fn from_toml(source: &str) -> Result<Self, ContentError> {
        let raw: RawCatalog = toml::from_str(source).map_err(|source| ContentError::Parse {
            what: "result catalog",
            source,
        })?;
        Self::new(raw.types, raw.default)
    }

    /// Exact entry for `code`, if authored.
    pub fn get(&self, code: TypeCode) -> Option<&ResultEntry> {
        self.entries.get(&code)
    }

    pub fn default_code(&self) -> TypeCode {
        self.default
    }

    pub fn default_entry(&self) -> &ResultEntry {
        // new() guarantees the default exists
        &self.entries[&self.default]
    }

    /// Entry for `code`, or the default entry when `code` is not authored.
    pub fn lookup(&self, code: TypeCode) -> &ResultEntry {
        match self.entries.get(&code) {
            Some(entry) => entry,
            None => {
                warn!(code = %code, fallback = %self.default, "No result content for type code");
                self.default_entry()
            }
        }
    }

    /// Codes among the 16 that have no entry.
    pub fn missing_codes(&self) -> Vec<TypeCode> {
        TypeCode::all()
            .filter(|code| !self.entries.contains_key(code))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TypeCode, &ResultEntry)> {
        self.entries.iter()
    }
}

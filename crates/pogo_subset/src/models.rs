//! Species records and output entries.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Base attack / defense / stamina.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatTriple {
    pub attack: u32,
    pub defense: u32,
    pub stamina: u32,
}

/// One usable Game Master record, reduced to what the outputs need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesFormEntry {
    pub species_id: u32,
    pub form: String,
    pub stats: Option<StatTriple>,
    pub has_evolution: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayNames {
    pub en: String,
    pub ko: String,
}

impl DisplayNames {
    /// Sorted, deduplicated, non-empty names.
    pub fn aliases(&self) -> Vec<String> {
        let mut aliases: Vec<String> = [&self.en, &self.ko]
            .into_iter()
            .filter(|name| !name.is_empty())
            .cloned()
            .collect();
        aliases.sort();
        aliases.dedup();
        aliases
    }
}

/// A value in `species-meta.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingEntry {
    pub id: u32,
    pub form: String,
    pub names: DisplayNames,
    pub aliases: Vec<String>,
    pub stats: Option<StatTriple>,
    pub has_evolution: bool,
}

impl MappingEntry {
    /// Composite key `"<id>__<FORM>"`.
    pub fn key(&self) -> String {
        mapping_key(self.id, &self.form)
    }
}

pub fn mapping_key(id: u32, form: &str) -> String {
    format!("{id}__{form}")
}

/// A value in `name-index.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameIndexEntry {
    #[serde(rename = "ref")]
    pub reference: String,
    pub display: String,
}

/// Output maps serialize in insertion order; `insert` on an existing key
/// replaces the value and keeps its position.
pub type SpeciesMap = IndexMap<String, MappingEntry>;
pub type NameIndex = IndexMap<String, NameIndexEntry>;

//! Pure transformation from fetched payloads to both outputs.

use serde_json::Value;

use crate::extract::extract_species;
use crate::forms::FormRules;
use crate::mapping::{build_full_mapping, FormSelection};
use crate::models::{NameIndex, SpeciesMap};
use crate::name_index::build_name_index;

/// The three upstream payloads.
#[derive(Debug, Clone, Default)]
pub struct Sources {
    pub game_master: Vec<Value>,
    pub english: Vec<String>,
    pub korean: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineOptions {
    pub selection: FormSelection,
    pub lowercase_keys: bool,
}

#[derive(Debug, Clone)]
pub struct Outputs {
    pub species: SpeciesMap,
    pub index: NameIndex,
}

/// Extract, map, then index.
pub fn run_pipeline(
    sources: &Sources,
    target_ids: &[u32],
    options: PipelineOptions,
    rules: &FormRules,
) -> Outputs {
    let groups = extract_species(&sources.game_master, rules);
    let species = build_full_mapping(
        target_ids,
        &groups,
        &sources.english,
        &sources.korean,
        options.selection,
        rules,
    );
    let index = build_name_index(&species, options.lowercase_keys, rules);
    Outputs { species, index }
}

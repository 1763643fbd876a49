//! Species extraction from Game Master records.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::fields::{any_non_empty_array, coerce_u32, lookup, lookup_label, lookup_object};
use crate::forms::FormRules;
use crate::models::{SpeciesFormEntry, StatTriple};

const SETTINGS_KEYS: &[&str] = &["pokemon_settings", "pokemonSettings"];
const TEMPLATE_ID_KEYS: &[&str] = &["template_id", "templateId"];
const DEX_NUMBER_KEYS: &[&str] = &["pokedex_number", "pokedexNumber"];
const STATS_KEYS: &[&str] = &["stats", "baseStats"];
const ATTACK_KEYS: &[&str] = &["base_attack", "baseAttack"];
const DEFENSE_KEYS: &[&str] = &["base_defense", "baseDefense"];
const STAMINA_KEYS: &[&str] = &["base_stamina", "baseStamina"];
const FORM_KEYS: &[&str] = &["form", "form_value", "formValue"];
const EVOLUTION_KEYS: &[&str] = &[
    "evolution_branch",
    "evolutionBranch",
    "evolutions",
    "evolution_ids",
    "evolutionIds",
];

static TEMPLATE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^V([0-9]{4,})_POKEMON").expect("template id pattern"));

/// Form entries grouped by dex number, each group in encounter order.
pub type SpeciesGroups = BTreeMap<u32, Vec<SpeciesFormEntry>>;

/// Scan raw records and group every usable one by dex number.
///
/// Records without settings, without a resolvable dex number, or without a
/// complete stat triple are skipped.
pub fn extract_species(records: &[Value], rules: &FormRules) -> SpeciesGroups {
    let mut groups = SpeciesGroups::new();
    let mut skipped = 0usize;

    for record in records {
        match extract_record(record, rules) {
            Some(entry) => groups.entry(entry.species_id).or_default().push(entry),
            None => skipped += 1,
        }
    }

    let kept: usize = groups.values().map(Vec::len).sum();
    log::info!(
        "[extract] {} form entries across {} species ({} records skipped)",
        kept,
        groups.len(),
        skipped
    );
    groups
}

/// Reduce one record to a form entry, or `None` if it can't be used.
pub fn extract_record(record: &Value, rules: &FormRules) -> Option<SpeciesFormEntry> {
    let outer = record.as_object()?;
    let data = outer
        .get("data")
        .and_then(Value::as_object)
        .unwrap_or(outer);
    let settings = lookup_object(data, SETTINGS_KEYS).filter(|s| !s.is_empty())?;

    let species_id = template_dex_number(outer).or_else(|| settings_dex_number(settings))?;
    let stats = pick_stats(lookup_object(settings, STATS_KEYS)?)?;
    let form = rules.normalize(lookup_label(settings, FORM_KEYS).as_deref());

    Some(SpeciesFormEntry {
        species_id,
        form,
        stats: Some(stats),
        has_evolution: any_non_empty_array(settings, EVOLUTION_KEYS),
    })
}

fn template_dex_number(record: &Map<String, Value>) -> Option<u32> {
    let template_id = lookup_label(record, TEMPLATE_ID_KEYS)?;
    let caps = TEMPLATE_ID.captures(&template_id)?;
    caps[1].parse().ok()
}

fn settings_dex_number(settings: &Map<String, Value>) -> Option<u32> {
    lookup(settings, DEX_NUMBER_KEYS)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
}

fn pick_stats(stats: &Map<String, Value>) -> Option<StatTriple> {
    let stat = |keys: &[&str]| lookup(stats, keys).and_then(coerce_u32);
    Some(StatTriple {
        attack: stat(ATTACK_KEYS)?,
        defense: stat(DEFENSE_KEYS)?,
        stamina: stat(STAMINA_KEYS)?,
    })
}

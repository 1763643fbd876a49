//! Name → mapping-key reverse lookup (`name-index.json`).

use std::collections::BTreeMap;

use indexmap::map::Entry;

use crate::forms::{form_or_default, FormRules};
use crate::models::{DisplayNames, NameIndex, NameIndexEntry, SpeciesMap};

/// One mapping key per dex number: the priority form if present, else the
/// species' first key.
pub fn choose_default_refs(full: &SpeciesMap, rules: &FormRules) -> BTreeMap<u32, String> {
    let mut by_id: BTreeMap<u32, Vec<(&str, &str)>> = BTreeMap::new();
    for (key, entry) in full.iter() {
        by_id
            .entry(entry.id)
            .or_default()
            .push((key.as_str(), form_or_default(&entry.form)));
    }

    by_id
        .into_iter()
        .map(|(id, refs)| {
            let (key, _) = rules
                .pick_preferred(&refs, |(_, form)| *form)
                .unwrap_or(&refs[0]);
            (id, key.to_string())
        })
        .collect()
}

/// Build the index. Species are visited in ascending dex order and the
/// first species to claim a name key keeps it.
pub fn build_name_index(full: &SpeciesMap, lowercase_keys: bool, rules: &FormRules) -> NameIndex {
    let chosen = choose_default_refs(full, rules);

    let mut names_by_id: BTreeMap<u32, &DisplayNames> = BTreeMap::new();
    for entry in full.values() {
        names_by_id.entry(entry.id).or_insert(&entry.names);
    }

    let mut index = NameIndex::new();
    let mut shadowed = 0usize;
    for (id, reference) in &chosen {
        let Some(names) = names_by_id.get(id) else {
            continue;
        };
        for name in [&names.en, &names.ko] {
            if name.is_empty() {
                continue;
            }
            let key = if lowercase_keys {
                name.to_lowercase()
            } else {
                name.clone()
            };
            match index.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(NameIndexEntry {
                        reference: reference.clone(),
                        display: name.clone(),
                    });
                }
                Entry::Occupied(_) => {
                    shadowed += 1;
                    log::debug!("[index] {name:?} already claimed, skipping for #{id}");
                }
            }
        }
    }

    log::info!(
        "[index] {} name keys for {} species ({} shadowed)",
        index.len(),
        chosen.len(),
        shadowed
    );
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MappingEntry, StatTriple};

    fn entry(id: u32, form: &str, en: &str, ko: &str) -> MappingEntry {
        let names = DisplayNames {
            en: en.to_string(),
            ko: ko.to_string(),
        };
        MappingEntry {
            id,
            form: form.to_string(),
            aliases: names.aliases(),
            names,
            stats: Some(StatTriple { attack: 1, defense: 1, stamina: 1 }),
            has_evolution: false,
        }
    }

    fn mapping(entries: Vec<MappingEntry>) -> SpeciesMap {
        let mut map = SpeciesMap::new();
        for e in entries {
            map.insert(e.key(), e);
        }
        map
    }

    #[test]
    fn test_ref_points_at_priority_form() {
        let full = mapping(vec![
            entry(37, "ALOLA", "Vulpix", "식스테일"),
            entry(37, "NORMAL", "Vulpix", "식스테일"),
        ]);
        let index = build_name_index(&full, true, &FormRules::DEFAULT);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get("vulpix").unwrap().reference, "37__NORMAL");
        assert_eq!(index.get("vulpix").unwrap().display, "Vulpix");
        assert_eq!(index.get("식스테일").unwrap().reference, "37__NORMAL");
    }

    #[test]
    fn test_falls_back_to_first_key() {
        let full = mapping(vec![
            entry(386, "DEOXYS_ATTACK", "Deoxys", ""),
            entry(386, "DEOXYS_SPEED", "Deoxys", ""),
        ]);
        let refs = choose_default_refs(&full, &FormRules::DEFAULT);
        assert_eq!(refs[&386], "386__DEOXYS_ATTACK");
    }

    #[test]
    fn test_case_kept_without_lowercase_flag() {
        let full = mapping(vec![entry(25, "NORMAL", "Pikachu", "피카츄")]);
        let index = build_name_index(&full, false, &FormRules::DEFAULT);
        assert!(index.get("Pikachu").is_some());
        assert!(index.get("pikachu").is_none());
    }

    #[test]
    fn test_first_species_wins_collision() {
        // Inserted out of dex order; the lower dex number still wins.
        let full = mapping(vec![
            entry(30, "NORMAL", "Nidorina", "Nido"),
            entry(29, "NORMAL", "Nidoran", "nido"),
        ]);
        let index = build_name_index(&full, true, &FormRules::DEFAULT);
        let nido = index.get("nido").unwrap();
        assert_eq!(nido.reference, "29__NORMAL");
        assert_eq!(nido.display, "nido");
        assert_eq!(index.keys().collect::<Vec<_>>(), vec!["nidoran", "nido", "nidorina"]);
    }

    #[test]
    fn test_every_ref_exists_in_mapping() {
        let full = mapping(vec![
            entry(1, "NORMAL", "Bulbasaur", "이상해씨"),
            entry(52, "GALAR", "Meowth", "나옹"),
            entry(52, "ALOLA", "Meowth", "나옹"),
            entry(132, "", "Ditto", "메타몽"),
        ]);
        let index = build_name_index(&full, true, &FormRules::DEFAULT);
        for entry in index.values() {
            assert!(full.contains_key(&entry.reference), "dangling ref {}", entry.reference);
        }
        assert_eq!(index.get("meowth").unwrap().reference, "52__GALAR");
        assert_eq!(index.get("ditto").unwrap().reference, "132__");
    }
}

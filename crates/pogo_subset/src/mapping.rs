//! Full species/form mapping (`species-meta.json`).

use crate::extract::SpeciesGroups;
use crate::forms::{form_or_default, FormRules};
use crate::models::{mapping_key, DisplayNames, MappingEntry, SpeciesFormEntry, SpeciesMap};

/// How many forms per species end up in the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormSelection {
    /// Every extracted form entry.
    #[default]
    AllForms,
    /// One representative form per species.
    Canonical,
}

/// Display name for a dex number from a positional (`id - 1`) name list.
pub fn name_for(names: &[String], id: u32) -> String {
    (id as usize)
        .checked_sub(1)
        .and_then(|slot| names.get(slot))
        .cloned()
        .unwrap_or_default()
}

/// Build the mapping for `target_ids`, in ascending id order.
///
/// Ids with no extracted form entries are left out.
pub fn build_full_mapping(
    target_ids: &[u32],
    groups: &SpeciesGroups,
    en_names: &[String],
    ko_names: &[String],
    selection: FormSelection,
    rules: &FormRules,
) -> SpeciesMap {
    let mut ids = target_ids.to_vec();
    ids.sort_unstable();
    ids.dedup();

    let mut out = SpeciesMap::new();
    for id in ids {
        let forms = match groups.get(&id) {
            Some(forms) if !forms.is_empty() => forms,
            _ => continue,
        };
        let names = DisplayNames {
            en: name_for(en_names, id),
            ko: name_for(ko_names, id),
        };
        let aliases = names.aliases();
        let has_evolution = forms.iter().any(|e| e.has_evolution);

        let entry = |form_entry: &SpeciesFormEntry| MappingEntry {
            id,
            form: form_or_default(&form_entry.form).to_string(),
            names: names.clone(),
            aliases: aliases.clone(),
            stats: form_entry.stats,
            has_evolution,
        };

        match selection {
            FormSelection::AllForms => {
                for form_entry in forms {
                    let e = entry(form_entry);
                    out.insert(mapping_key(id, &e.form), e);
                }
            }
            FormSelection::Canonical => {
                let chosen = choose_canonical(forms, rules);
                let e = entry(chosen);
                out.insert(mapping_key(id, &e.form), e);
            }
        }
    }

    log::info!("[mapping] {} entries for {} requested ids", out.len(), target_ids.len());
    out
}

/// Priority form if present, else the first entry with stats, else the first entry.
fn choose_canonical<'a>(forms: &'a [SpeciesFormEntry], rules: &FormRules) -> &'a SpeciesFormEntry {
    rules
        .pick_preferred(forms, |e| e.form.as_str())
        .or_else(|| forms.iter().find(|e| e.stats.is_some()))
        .unwrap_or(&forms[0])
}

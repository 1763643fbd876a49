//! Stub upstream payloads for pipeline tests.

#![allow(dead_code)]

use serde_json::{json, Value};

/// A Game Master record in the current camelCase layout.
pub fn gm_record(dex: u32, name: &str, form: Option<&str>, stats: [u32; 3], evolves: bool) -> Value {
    let mut settings = json!({
        "pokemonId": name,
        "stats": {"baseAttack": stats[0], "baseDefense": stats[1], "baseStamina": stats[2]},
    });
    if let Some(form) = form {
        settings["form"] = json!(form);
    }
    if evolves {
        settings["evolutionBranch"] = json!([{"evolution": "NEXT"}]);
    }
    let template_id = format!("V{dex:04}_POKEMON_{name}");
    json!({
        "templateId": template_id,
        "data": {"templateId": template_id, "pokemonSettings": settings},
    })
}

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Positional name list (`list[id - 1]`) with only the given slots filled.
pub fn positional(entries: &[(u32, &str)]) -> Vec<String> {
    let len = entries.iter().map(|(id, _)| *id as usize).max().unwrap_or(0);
    let mut list = vec![String::new(); len];
    for (id, name) in entries {
        list[*id as usize - 1] = name.to_string();
    }
    list
}

//! Form label normalization and canonical form selection.

use phf::phf_map;

/// The form token used when a record carries no form label.
pub const DEFAULT_FORM: &str = "NORMAL";

const FORM_SYNONYMS: phf::Map<&'static str, &'static str> = phf_map! {
    "ALOLAN" => "ALOLA",
    "GALARIAN" => "GALAR",
    "HISUIAN" => "HISUI",
    "ORDINARY" => "ORDINARY",
    "INCARNATE" => "INCARNATE",
    "ARIA" => "ARIA",
    "STANDARD" => "STANDARD",
    "THERIAN" => "THERIAN",
    "SPEED" => "SPEED",
    "MEGA" => "MEGA",
    "MEGA_X" => "MEGA_X",
    "MEGA_Y" => "MEGA_Y",
    "OVERCAST" => "OVERCAST",
    "SUNNY" => "SUNNY",
    "RAINCLOUD" => "RAINCLOUD",
    "SNOWCLOUD" => "SNOWCLOUD",
    "SMALL" => "SMALL",
    "AVERAGE" => "AVERAGE",
    "LARGE" => "LARGE",
    "SUPER" => "SUPER",
};

/// Forms tried, in order, when a single representative form is needed.
const FORM_PRIORITY: &[&str] = &[
    "NORMAL",
    "STANDARD",
    "INCARNATE",
    "ORDINARY",
    "ARIA",
    "OVERCAST",
    "AVERAGE",
];

/// Immutable form tables shared by the extractor, mapping and index builders.
#[derive(Debug, Clone, Copy)]
pub struct FormRules {
    pub synonyms: &'static phf::Map<&'static str, &'static str>,
    pub priority: &'static [&'static str],
}

impl FormRules {
    pub const DEFAULT: FormRules = FormRules {
        synonyms: &FORM_SYNONYMS,
        priority: FORM_PRIORITY,
    };

    /// Map a raw form label onto its canonical uppercase token.
    ///
    /// `None` and `""` give [`DEFAULT_FORM`]. Labels outside the synonym
    /// table come back with only the `FORM` affixes and edge separators removed.
    pub fn normalize(&self, raw: Option<&str>) -> String {
        let raw = match raw {
            Some(s) if !s.is_empty() => s,
            _ => return DEFAULT_FORM.to_string(),
        };
        let upper = raw.to_uppercase();
        let stripped = upper
            .replace("FORM_", "")
            .replace("FORM", "")
            .replace("__", "_");
        let token = stripped.trim_matches(|c: char| c == '_' || c == '-' || c == ' ');
        match self.synonyms.get(token) {
            Some(canonical) => canonical.to_string(),
            None => token.to_string(),
        }
    }

    /// First item whose form appears earliest in the priority order.
    pub fn pick_preferred<'a, T, F>(&self, items: &'a [T], form_of: F) -> Option<&'a T>
    where
        F: Fn(&T) -> &str,
    {
        self.priority
            .iter()
            .find_map(|pref| items.iter().find(|item| form_of(item) == *pref))
    }
}

impl Default for FormRules {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Empty form tokens are keyed as [`DEFAULT_FORM`].
pub fn form_or_default(form: &str) -> &str {
    if form.is_empty() {
        DEFAULT_FORM
    } else {
        form
    }
}

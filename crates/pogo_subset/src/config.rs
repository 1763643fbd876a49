//! Built-in constants: upstream sources, HTTP client identity, defaults.

use std::time::Duration;

pub const GAME_MASTER_URL: &str =
    "https://raw.githubusercontent.com/PokeMiners/game_masters/master/latest/latest.json";
pub const EN_NAMES_URL: &str =
    "https://raw.githubusercontent.com/sindresorhus/pokemon/main/data/en.json";
pub const KO_NAMES_URL: &str =
    "https://raw.githubusercontent.com/sindresorhus/pokemon/main/data/ko.json";

pub const USER_AGENT: &str = "pvp-bulk-builder/1.0";
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Id block used when neither `--ids` nor `--ids-file` is given.
pub const DEFAULT_ID_BLOCK: &str = "1-1025\n";

pub const DEFAULT_OUTPUT_PATH: &str = "data/pokemon/species-meta.json";
pub const DEFAULT_INDEX_PATH: &str = "data/pokemon/name-index.json";

/// Where the three upstream payloads come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUrls {
    pub game_master: String,
    pub english: String,
    pub korean: String,
}

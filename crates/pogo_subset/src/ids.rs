//! Species id block parsing.
//!
//! Entries are separated by whitespace, commas or newlines. Each entry is a
//! single dex number (`25`) or an inclusive range (`1-151`; `151-1` is the
//! same range, and `1 - 151` is accepted too).

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static RANGE_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*-\s*").expect("range dash pattern"));

/// Parse an id block into a sorted, deduplicated list of dex numbers.
pub fn parse_id_block(block: &str) -> Result<Vec<u32>> {
    let mut ids = BTreeSet::new();
    for line in block.lines() {
        let line = RANGE_DASH.replace_all(line.trim(), "-");
        let entries = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|entry| !entry.is_empty());
        for entry in entries {
            match entry.split_once('-') {
                Some((a, b)) => {
                    let a = parse_id(a, entry)?;
                    let b = parse_id(b, entry)?;
                    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                    ids.extend(lo..=hi);
                }
                None => {
                    ids.insert(parse_id(entry, entry)?);
                }
            }
        }
    }
    Ok(ids.into_iter().collect())
}

fn parse_id(token: &str, entry: &str) -> Result<u32> {
    let id: u32 = token
        .parse()
        .map_err(|e| Error::format(entry, format!("{token:?} is not a dex number ({e})")))?;
    if id == 0 {
        return Err(Error::format(entry, "dex numbers start at 1"));
    }
    Ok(id)
}

//! Blocking JSON fetches for the three upstream sources.

use reqwest::blocking::Client;
use serde_json::Value;

use crate::config::{FETCH_TIMEOUT, USER_AGENT};
use crate::error::{Error, Result};

/// HTTP client with the fixed timeout and user agent.
pub fn http_client() -> Result<Client> {
    Client::builder()
        .timeout(FETCH_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|source| Error::Network {
            url: String::from("<client setup>"),
            source,
        })
}

/// GET `url` and decode the body as JSON.
pub fn fetch_json(client: &Client, url: &str) -> Result<Value> {
    log::info!("[fetch] GET {url}");
    let network = |source| Error::Network {
        url: url.to_string(),
        source,
    };

    let body = client
        .get(url)
        .send()
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.bytes())
        .map_err(network)?;

    let payload: Value = serde_json::from_slice(&body).map_err(|source| Error::Decode {
        origin: url.to_string(),
        source,
    })?;
    log::info!("[fetch] {url} -> {}", describe(&payload));
    Ok(payload)
}

/// Fetch the Game Master snapshot, which must be a JSON array of records.
pub fn fetch_records(client: &Client, url: &str) -> Result<Vec<Value>> {
    decode_as(fetch_json(client, url)?, url)
}

/// Fetch a positional name list, which must be a JSON array of strings.
pub fn fetch_name_list(client: &Client, url: &str) -> Result<Vec<String>> {
    decode_as(fetch_json(client, url)?, url)
}

fn decode_as<T: serde::de::DeserializeOwned>(payload: Value, origin: &str) -> Result<T> {
    serde_json::from_value(payload).map_err(|source| Error::Decode {
        origin: origin.to_string(),
        source,
    })
}

fn describe(payload: &Value) -> String {
    match payload {
        Value::Object(map) => format!("object with {} keys", map.len()),
        Value::Array(items) => format!("array with {} items", items.len()),
        Value::Null => "null".to_string(),
        Value::Bool(_) => "bool".to_string(),
        Value::Number(_) => "number".to_string(),
        Value::String(_) => "string".to_string(),
    }
}

// Copyright 2025 Alexandre D. Díaz
//! Coercion of raw placeholder strings into typed optional values.
//!
//! A placeholder the server had no value for arrives as an empty (or blank)
//! string. Every helper here maps that case to `None` so the viewer falls back
//! to its own defaults instead of receiving an empty value.
use serde_json::Value;

use crate::error::Result;

/// Returns `None` for empty or whitespace-only input, otherwise the input untouched.
pub fn to_optional_string(input: &str) -> Option<String> {
    if input.trim().is_empty() {
        return None;
    }
    Some(input.to_string())
}

/// Strict base-10 parse. Anything that is not a whole integer is `None`,
/// "12px" included.
pub fn to_optional_integer(input: &str) -> Option<i64> {
    let clean_input = to_optional_string(input)?;
    clean_input.trim().parse::<i64>().ok()
}

/// Only the exact literals `true` and `false` are recognised.
pub fn to_optional_boolean(input: &str) -> Option<bool> {
    match input {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

pub fn to_optional_string_array(input: &str) -> Option<Vec<String>> {
    let items: Vec<String> = input.split(',').filter_map(to_optional_string).collect();
    if items.is_empty() {
        return None;
    }
    Some(items)
}

/// Decodes HTML character references as plain text. Tags are left as they are.
pub fn decode_html_entities(input: &str) -> Option<String> {
    if input.is_empty() {
        return None;
    }
    Some(html_escape::decode_html_entities(input).into_owned())
}

/// Parses an entity-encoded JSON document. Blank input is `None`, malformed
/// JSON is an error.
pub fn to_optional_object(input: &str) -> Result<Option<Value>> {
    let trimmed = input.trim();
    let decoded = match decode_html_entities(trimmed) {
        Some(decoded) => decoded,
        None => return Ok(None),
    };
    let value = serde_json::from_str(&decoded)?;
    Ok(Some(value))
}

//! JSON and binary encodings of an attribute set.
//!
//! Both formats carry the same flat string-to-string map. JSON input is
//! screened by cheap syntactic checks before the parser runs, so obviously
//! wrong payloads fail as validation errors rather than parser errors.
//! The binary format is MessagePack.

use crate::{ModelError, ModelResult};
use dataobject_types::{Attributes, ID_KEY, attributes_from_json};
use serde_json::{Map, Value};

const QUOTED_ID_KEY: &str = "\"id\"";

/// Cheap structural checks on a JSON payload. Does not parse.
fn validate_json(input: &str) -> ModelResult<()> {
    if input.is_empty() || input == "{}" || input == "null" {
        return Err(ModelError::InvalidJson("must be a non-empty object"));
    }
    if !input.starts_with('{') || !input.ends_with('}') {
        return Err(ModelError::InvalidJson("must be a json object"));
    }
    if !input.contains(QUOTED_ID_KEY) {
        return Err(ModelError::InvalidJson("must contain an \"id\" key"));
    }
    Ok(())
}

pub(crate) fn decode_json(input: &str) -> ModelResult<Attributes> {
    let trimmed = input.trim();
    validate_json(trimmed)?;

    let object: Map<String, Value> = serde_json::from_str(trimmed)?;
    // The pre-check only saw a quoted "id" somewhere, possibly as a value.
    if !object.contains_key(ID_KEY) {
        return Err(ModelError::MissingId { format: "json" });
    }
    Ok(attributes_from_json(object))
}

pub(crate) fn encode_json(data: &Attributes) -> ModelResult<String> {
    Ok(serde_json::to_string(data)?)
}

pub(crate) fn decode_binary(bytes: &[u8]) -> ModelResult<Attributes> {
    let data: Attributes = rmp_serde::from_slice(bytes)?;
    if data.get(ID_KEY).is_none_or(String::is_empty) {
        return Err(ModelError::MissingId { format: "binary" });
    }
    Ok(data)
}

pub(crate) fn encode_binary(data: &Attributes) -> ModelResult<Vec<u8>> {
    Ok(rmp_serde::to_vec(data)?)
}

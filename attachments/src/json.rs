//! Field accessors for the JSON form of attachments.
//!
//! JSON numbers lose precision past 2^53, so 64-bit values travel as decimal
//! strings. Ids are rendered unsigned, quantities signed. Raw bytes travel as
//! lowercase hex. 8- and 32-bit integers are plain JSON numbers.
//!
//! On input we are a little more forgiving than on output: 64-bit fields
//! accept either a decimal string or a JSON integer.

use serde_json::{Map, Value};

use crate::config::VERSION_KEY_PREFIX;
use crate::error::{CodecError, Result};

/// The JSON object an attachment is read from and written into.
pub type JsonMap = Map<String, Value>;

/// Returns the `version.<name>` key for an appendix.
pub fn version_key(appendix_name: &str) -> String {
    format!("{}{}", VERSION_KEY_PREFIX, appendix_name)
}

fn field<'a>(map: &'a JsonMap, key: &str) -> Result<&'a Value> {
    match map.get(key) {
        Some(Value::Null) | None => Err(CodecError::missing(key)),
        Some(value) => Ok(value),
    }
}

/// Reads an unsigned 64-bit id (or unsigned quantity) from a decimal string
/// or a non-negative JSON integer.
pub fn get_unsigned(map: &JsonMap, key: &str) -> Result<u64> {
    match field(map, key)? {
        Value::String(s) => s
            .parse::<u64>()
            .map_err(|e| CodecError::invalid(key, format!("not an unsigned decimal: {}", e))),
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| CodecError::invalid(key, "not an unsigned 64-bit integer")),
        other => Err(CodecError::invalid(key, format!("unexpected JSON value {}", other))),
    }
}

/// Reads a signed 64-bit quantity from a decimal string or a JSON integer.
pub fn get_signed(map: &JsonMap, key: &str) -> Result<i64> {
    match field(map, key)? {
        Value::String(s) => s
            .parse::<i64>()
            .map_err(|e| CodecError::invalid(key, format!("not a signed decimal: {}", e))),
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| CodecError::invalid(key, "not a signed 64-bit integer")),
        other => Err(CodecError::invalid(key, format!("unexpected JSON value {}", other))),
    }
}

/// Reads a plain JSON number that must fit in a `u32`.
pub fn get_u32(map: &JsonMap, key: &str) -> Result<u32> {
    field(map, key)?
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| CodecError::invalid(key, "expected an unsigned 32-bit number"))
}

/// Reads a plain JSON number that must fit in a `u8`.
pub fn get_u8(map: &JsonMap, key: &str) -> Result<u8> {
    field(map, key)?
        .as_u64()
        .and_then(|n| u8::try_from(n).ok())
        .ok_or_else(|| CodecError::invalid(key, "expected an unsigned 8-bit number"))
}

/// Reads a JSON boolean.
pub fn get_bool(map: &JsonMap, key: &str) -> Result<bool> {
    field(map, key)?
        .as_bool()
        .ok_or_else(|| CodecError::invalid(key, "expected a boolean"))
}

/// Borrows a JSON string.
pub fn get_str<'a>(map: &'a JsonMap, key: &str) -> Result<&'a str> {
    field(map, key)?
        .as_str()
        .ok_or_else(|| CodecError::invalid(key, "expected a string"))
}

/// Reads an optional hex-encoded byte string. Absent or `null` yields `None`.
pub fn get_hex(map: &JsonMap, key: &str) -> Result<Option<Vec<u8>>> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => hex::decode(s)
            .map(Some)
            .map_err(|e| CodecError::invalid(key, e.to_string())),
        Some(other) => Err(CodecError::invalid(
            key,
            format!("expected a hex string, got {}", other),
        )),
    }
}

/// Borrows a JSON array.
pub fn get_array<'a>(map: &'a JsonMap, key: &str) -> Result<&'a Vec<Value>> {
    field(map, key)?
        .as_array()
        .ok_or_else(|| CodecError::invalid(key, "expected an array"))
}

/// Reads `version.<name>`. A missing key means version 0.
pub fn get_version(map: &JsonMap, appendix_name: &str) -> Result<u8> {
    let key = version_key(appendix_name);
    match map.get(&key) {
        None | Some(Value::Null) => Ok(0),
        Some(value) => value
            .as_u64()
            .and_then(|n| u8::try_from(n).ok())
            .ok_or_else(|| CodecError::invalid(&key, "expected a version number 0-255")),
    }
}

/// Writes an unsigned 64-bit value as a decimal string.
pub fn put_unsigned(map: &mut JsonMap, key: &str, value: u64) {
    map.insert(key.to_string(), Value::String(value.to_string()));
}

/// Writes a signed 64-bit value as a decimal string.
pub fn put_signed(map: &mut JsonMap, key: &str, value: i64) {
    map.insert(key.to_string(), Value::String(value.to_string()));
}

/// Writes bytes as lowercase hex.
pub fn put_hex(map: &mut JsonMap, key: &str, value: &[u8]) {
    map.insert(key.to_string(), Value::String(hex::encode(value)));
}

/// Writes the `version.<name>` key.
pub fn put_version(map: &mut JsonMap, appendix_name: &str, version: u8) {
    map.insert(version_key(appendix_name), Value::from(version));
}

/// Borrows a JSON value as an object, for nested records.
pub fn as_object<'a>(value: &'a Value, key: &str) -> Result<&'a JsonMap> {
    value
        .as_object()
        .ok_or_else(|| CodecError::invalid(key, "expected an object"))
}

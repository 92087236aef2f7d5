//! Decoding boundary between raw JSON payloads and typed records.
//!
//! Every public entry point normalizes key casing first (`homeRuns` and
//! `homeruns` both become `homeruns`), so the typed side only ever sees the
//! canonical lower-case field names.

use crate::error::ShapeError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};


pub type Object = Map<String, Value>;

/// Recursively lower-case every object key. Idempotent.
pub fn normalize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k.to_lowercase(), normalize_keys(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(normalize_keys).collect()),
        other => other,
    }
}

/// `null` and `{}` both mean the API omitted a nested object.
pub fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Input to a nested decode: either raw JSON or an instance decoded earlier.
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    Raw(Value),
    Decoded(T),
}

impl<T> From<Value> for Nested<T> {
    fn from(value: Value) -> Self {
        Nested::Raw(value)
    }
}

/// A record that can be built from a JSON mapping.
pub trait Decode: Sized {
    const TYPE_NAME: &'static str;

    /// Build the record from a mapping whose keys are already normalized.
    fn decode_fields(fields: &Fields<'_>) -> Result<Self, ShapeError>;

    fn decode_object(map: &Object) -> Result<Self, ShapeError> {
        Self::decode_fields(&Fields::new(Self::TYPE_NAME, map))
    }

    /// Decode a raw payload straight from the API.
    fn from_value(value: &Value) -> Result<Self, ShapeError> {
        match normalize_keys(value.clone()) {
            Value::Object(map) => Self::decode_object(&map),
            other => Err(ShapeError::invalid(
                Self::TYPE_NAME,
                "",
                format!("expected an object, found {}", json_kind(&other)),
            )),
        }
    }

    /// Absent raw input yields `None`; an already decoded instance is kept as-is.
    fn from_nested(input: Nested<Self>) -> Result<Option<Self>, ShapeError> {
        match input {
            Nested::Decoded(record) => Ok(Some(record)),
            Nested::Raw(raw) if is_absent(&raw) => Ok(None),
            Nested::Raw(raw) => Self::from_value(&raw).map(Some),
        }
    }
}

/// Implements [`Decode`] for a flat serde record: the listed keys must be
/// present, everything else is left to the derived `Deserialize`.
macro_rules! flat_decode {
    ($ty:ty, [$($required:literal),* $(,)?]) => {
        impl $crate::models::decode::Decode for $ty {
            const TYPE_NAME: &'static str = stringify!($ty);

            fn decode_fields(
                fields: &$crate::models::decode::Fields<'_>,
            ) -> Result<Self, $crate::error::ShapeError> {
                fields.require(&[$($required),*])?;
                fields.flatten()
            }
        }
    };
}
pub(crate) use flat_decode;

/// Read access to one normalized mapping, reporting failures against the
/// type being decoded.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    type_name: &'static str,
    map: &'a Object,
}

impl<'a> Fields<'a> {
    pub fn new(type_name: &'static str, map: &'a Object) -> Self {
        Self { type_name, map }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn object(&self) -> &'a Object {
        self.map
    }

    /// The value under `key`, treating `null` as missing.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Fail on the first of `keys` that is missing.
    pub fn require(&self, keys: &[&str]) -> Result<(), ShapeError> {
        match keys.iter().find(|key| !self.has(key)) {
            Some(key) => Err(ShapeError::missing(self.type_name, *key)),
            None => Ok(()),
        }
    }

    pub fn required<T: DeserializeOwned>(&self, key: &str) -> Result<T, ShapeError> {
        let value = self
            .get(key)
            .ok_or_else(|| ShapeError::missing(self.type_name, key))?;
        self.convert(key, value)
    }

    pub fn optional<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, ShapeError> {
        self.get(key).map(|value| self.convert(key, value)).transpose()
    }

    fn convert<T: DeserializeOwned>(&self, key: &str, value: &Value) -> Result<T, ShapeError> {
        deserialize_at(value).map_err(|(path, reason)| {
            let field = match path.chars().next() {
                None => key.to_string(),
                Some('[') => format!("{key}{path}"),
                Some(_) => format!("{key}.{path}"),
            };
            ShapeError::invalid(self.type_name, field, reason)
        })
    }

    /// Decode a nested object. Missing, `null` and `{}` are all absent.
    pub fn nested<T: Decode>(&self, key: &str) -> Result<Option<T>, ShapeError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::Object(map)) if map.is_empty() => Ok(None),
            Some(Value::Object(map)) => T::decode_object(map)
                .map(Some)
                .map_err(|e| e.within(key)),
            Some(other) => Err(ShapeError::invalid(
                self.type_name,
                key,
                format!("expected an object, found {}", json_kind(other)),
            )),
        }
    }

    pub fn nested_required<T: Decode>(&self, key: &str) -> Result<T, ShapeError> {
        self.nested(key)?
            .ok_or_else(|| ShapeError::missing(self.type_name, key))
    }

    /// Decode a list of nested objects, skipping absent entries.
    pub fn list<T: Decode>(&self, key: &str) -> Result<Vec<T>, ShapeError> {
        let items = match self.get(key) {
            None => return Ok(Vec::new()),
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(ShapeError::invalid(
                    self.type_name,
                    key,
                    format!("expected an array, found {}", json_kind(other)),
                ))
            }
        };

        items
            .iter()
            .enumerate()
            .filter(|(_, item)| !is_absent(item))
            .map(|(i, item)| match item {
                Value::Object(map) => {
                    T::decode_object(map).map_err(|e| e.within(&format!("{key}[{i}]")))
                }
                other => Err(ShapeError::invalid(
                    self.type_name,
                    format!("{key}[{i}]"),
                    format!("expected an object, found {}", json_kind(other)),
                )),
            })
            .collect()
    }

    /// Deserialize the whole mapping into a flat record; unknown keys are ignored.
    pub fn flatten<T: DeserializeOwned>(&self) -> Result<T, ShapeError> {
        let value = Value::Object(self.map.clone());
        deserialize_at(&value)
            .map_err(|(path, reason)| ShapeError::invalid(self.type_name, path, reason))
    }
}

/// Deserialize, reporting the key path of a failure (`""` for the value itself).
fn deserialize_at<T: DeserializeOwned>(value: &Value) -> Result<T, (String, String)> {
    serde_path_to_error::deserialize(value).map_err(|e| {
        let path = e.path().to_string();
        let path = if path == "." { String::new() } else { path };
        (path, e.into_inner().to_string())
    })
}

/// Deserialize helper used by flat records for fields that hold a nested
/// code/description pair or similar: `{}` reads as `None`.
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if is_absent(&value) {
        return Ok(None);
    }
    T::deserialize(&value).map(Some).map_err(serde::de::Error::custom)
}

//! Request payloads for write operations.
//!
//! This module provides [`Payload`], a JSON object under construction that
//! knows how to check itself for mandatory keys before it is sent.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{Error, ValidationError};

/// A JSON object sent as the body of a create, update, associate or launch
/// request.
///
/// Keys are whatever the server accepts for the target resource; the
/// client only checks that mandatory keys are present, never their values.
///
/// # Example
///
/// ```
/// use awx_core::Payload;
///
/// let payload = Payload::new()
///     .field("name", "deploy")
///     .field("job_type", "run")
///     .field("inventory", 1)
///     .field("project", 4);
///
/// assert!(payload.require(&["name", "job_type", "inventory", "project"]).is_ok());
/// assert!(payload.require(&["playbook"]).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// An empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a payload from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a JSON object.
    pub fn from_value(value: Value) -> Result<Self, Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ValidationError::Payload {
                reason: format!("payload must be a JSON object, got {}", json_kind(&other)),
            }
            .into()),
        }
    }

    /// Create a payload from any serializable value, such as a typed
    /// request struct.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the value cannot be encoded and a
    /// validation error if it does not encode to an object.
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self, Error> {
        let value = serde_json::to_value(value).map_err(Error::Serialization)?;
        Self::from_value(value)
    }

    /// Add a field, replacing any previous value.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a field in place, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Remove a field.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    /// Get a field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns true if the key is present, whatever its value.
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the required keys that are absent, in the order given.
    pub fn missing<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|key| !self.contains(key))
            .collect()
    }

    /// Check that every required key is present.
    ///
    /// Presence is by key only: `null` or empty values pass.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] listing the absent keys.
    pub fn require(&self, required: &[&str]) -> Result<(), Error> {
        let missing = self.missing(required);
        if missing.is_empty() {
            return Ok(());
        }

        Err(ValidationError::MissingFields {
            fields: missing.into_iter().map(str::to_string).collect(),
        }
        .into())
    }

    /// Encode the payload as a JSON request body.
    pub fn to_body(&self) -> Result<Vec<u8>, Error> {
        serde_json::to_vec(&self.0).map_err(Error::Serialization)
    }

    /// Get a reference to the inner JSON object.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume and return the inner JSON object.
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Payload {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl Serialize for Payload {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Payload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Payload::from_value(value).map_err(serde::de::Error::custom)
    }
}

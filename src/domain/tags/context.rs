//! Expansion context passed to tag handlers

use crate::error::{MailtagsError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;

/// A single context argument value
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ContextValue {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
}

impl ContextValue {
    /// Infer a typed value from command-line text.
    ///
    /// Integers win over floats, floats over booleans, anything else stays text.
    pub fn infer(raw: &str) -> Self {
        if let Ok(i) = raw.parse::<i64>() {
            ContextValue::Integer(i)
        } else if let Ok(f) = raw.parse::<f64>() {
            ContextValue::Float(f)
        } else if let Ok(b) = raw.parse::<bool>() {
            ContextValue::Boolean(b)
        } else {
            ContextValue::Text(raw.to_string())
        }
    }
}

impl fmt::Display for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextValue::Integer(i) => write!(f, "{}", i),
            ContextValue::Float(v) => write!(f, "{}", v),
            ContextValue::Boolean(b) => write!(f, "{}", b),
            ContextValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ContextValue {
    fn from(value: i64) -> Self {
        ContextValue::Integer(value)
    }
}

/// Values past `i64::MAX` are kept as text so `require_id` can still read them
impl From<u64> for ContextValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => ContextValue::Integer(i),
            Err(_) => ContextValue::Text(value.to_string()),
        }
    }
}

impl From<f64> for ContextValue {
    fn from(value: f64) -> Self {
        ContextValue::Float(value)
    }
}

impl From<bool> for ContextValue {
    fn from(value: bool) -> Self {
        ContextValue::Boolean(value)
    }
}

impl From<&str> for ContextValue {
    fn from(value: &str) -> Self {
        ContextValue::Text(value.to_string())
    }
}

impl From<String> for ContextValue {
    fn from(value: String) -> Self {
        ContextValue::Text(value)
    }
}

/// Arguments available to every handler during one expansion pass
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct TagContext {
    values: BTreeMap<String, ContextValue>,
}

impl TagContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ContextValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ContextValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ContextValue> {
        self.values.get(key)
    }

    /// Get a required value, failing with `MissingContext` when absent
    pub fn require(&self, key: &str) -> Result<&ContextValue> {
        self.get(key)
            .ok_or_else(|| MailtagsError::MissingContext(key.to_string()))
    }

    /// Get a required value as a non-negative identifier
    pub fn require_id(&self, key: &str) -> Result<u64> {
        let invalid = |reason: &str| MailtagsError::InvalidContextValue {
            key: key.to_string(),
            reason: reason.to_string(),
        };

        match self.require(key)? {
            ContextValue::Integer(i) if *i >= 0 => Ok(*i as u64),
            ContextValue::Integer(_) => Err(invalid("identifier must not be negative")),
            ContextValue::Text(s) => s
                .trim()
                .parse::<u64>()
                .map_err(|_| invalid("expected a numeric identifier")),
            _ => Err(invalid("expected a numeric identifier")),
        }
    }

    /// Parse a `key=value` assignment from the command line
    pub fn parse_assignment(assignment: &str) -> Result<(String, ContextValue)> {
        let (key, value) = assignment.split_once('=').ok_or_else(|| {
            MailtagsError::Config(format!(
                "Invalid context assignment '{}': expected key=value",
                assignment
            ))
        })?;

        let key = key.trim();
        if key.is_empty() {
            return Err(MailtagsError::Config(format!(
                "Invalid context assignment '{}': empty key",
                assignment
            )));
        }

        Ok((key.to_string(), ContextValue::infer(value)))
    }

    /// Load a context from a flat TOML table
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Overlay another context; keys in `other` win
    pub fn merge(&mut self, other: TagContext) {
        self.values.extend(other.values);
    }
}

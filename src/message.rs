use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Number, Value};
use std::fmt;

/// A log message: text or a bare number.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Message {
    Text(String),
    Number(Number),
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Text(text) => f.write_str(text),
            Message::Number(number) => write!(f, "{}", number),
        }
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Text(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Text(text)
    }
}

impl From<i32> for Message {
    fn from(number: i32) -> Self {
        Message::Number(number.into())
    }
}

impl From<i64> for Message {
    fn from(number: i64) -> Self {
        Message::Number(number.into())
    }
}

impl From<u32> for Message {
    fn from(number: u32) -> Self {
        Message::Number(number.into())
    }
}

impl From<u64> for Message {
    fn from(number: u64) -> Self {
        Message::Number(number.into())
    }
}

impl From<f64> for Message {
    fn from(number: f64) -> Self {
        // JSON has no NaN/Infinity; those render as their text form
        match Number::from_f64(number) {
            Some(number) => Message::Number(number),
            None => Message::Text(number.to_string()),
        }
    }
}

/// Structured parameters attached to a logging call.
///
/// Iteration order is insertion order, which both output formats rely on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, Value)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, returning `self` for chaining.
    pub fn add(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Truthiness rule used when rendering params in simple mode: null, false,
/// zero and the empty string count as absent; arrays and objects (even
/// empty ones) do not.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map(|n| n != 0.0).unwrap_or(true),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Build a [`Params`] mapping in place: `params! { "key" => value, ... }`.
#[macro_export]
macro_rules! params {
    () => {
        $crate::message::Params::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut params = $crate::message::Params::new();
        $(params = params.add($key, $value);)+
        params
    }};
}

// Copyright 2024-2025 Cornell University
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@cornell.edu>
//
// Decodes WaveDrom JSON into signals.

use crate::{Result, WavetextError};
use serde_json::{Map, Value};

/// One row of a timing diagram.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(serde::Serialize, serde::Deserialize))]
pub struct Signal {
    pub name: Option<String>,
    pub wave: Option<String>,
    /// Labels of the `=` slots. Only used by graphical renderers.
    pub data: Vec<String>,
}

impl Signal {
    pub fn new(name: impl Into<String>, wave: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            wave: Some(wave.into()),
            data: Vec::new(),
        }
    }

    /// An empty row.
    pub fn spacer() -> Self {
        Self::default()
    }

    pub fn with_data<I, S>(mut self, data: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data = data.into_iter().map(|d| d.into()).collect();
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    #[inline]
    pub fn wave(&self) -> &str {
        self.wave.as_deref().unwrap_or("")
    }

    /// Converts a single entry of the `signal` array. Never fails: entries that are not
    /// objects (spacers, groups, `null`) and fields of the wrong type are treated as missing.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(entry) => Self::from_object(entry),
            _ => Self::spacer(),
        }
    }

    fn from_object(entry: &Map<String, Value>) -> Self {
        let string_field = |key: &str| entry.get(key).and_then(Value::as_str).map(str::to_string);
        let data = match entry.get("data") {
            Some(Value::Array(labels)) => labels.iter().map(data_label).collect(),
            // wave drom also accepts a single space separated string
            Some(Value::String(labels)) => labels.split_whitespace().map(str::to_string).collect(),
            _ => Vec::new(),
        };
        Self {
            name: string_field("name"),
            wave: string_field("wave"),
            data,
        }
    }
}

fn data_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A parsed WaveDrom description. Only the `signal` list is retained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(serde::Serialize, serde::Deserialize))]
pub struct WaveformDocument {
    pub signal: Vec<Signal>,
}

impl WaveformDocument {
    pub fn new(signal: Vec<Signal>) -> Self {
        Self { signal }
    }

    /// Checks that `value` is an object with a `signal` array.
    pub fn from_value(value: Value) -> Result<Self> {
        let mut top = match value {
            Value::Object(top) => top,
            other => {
                return Err(WavetextError::Shape(format!(
                    "expected a JSON object at the top level, found {}",
                    value_kind(&other)
                )))
            }
        };
        match top.remove("signal") {
            Some(Value::Array(entries)) => {
                let signal: Vec<_> = entries.iter().map(Signal::from_value).collect();
                log::debug!("decoded {} signal(s)", signal.len());
                Ok(Self { signal })
            }
            Some(other) => Err(WavetextError::Shape(format!(
                "\"signal\" must be an array, found {}",
                value_kind(&other)
            ))),
            None => Err(WavetextError::Shape(
                "missing \"signal\" array".to_string(),
            )),
        }
    }

    pub fn signals(&self) -> &[Signal] {
        &self.signal
    }
}

impl TryFrom<Value> for WaveformDocument {
    type Error = WavetextError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

impl std::str::FromStr for WaveformDocument {
    type Err = WavetextError;

    fn from_str(s: &str) -> Result<Self> {
        parse_document(s)
    }
}

/// Decodes JSON text. Invalid JSON results in [`WavetextError::Parse`], a document
/// without a `signal` array in [`WavetextError::Shape`].
pub fn parse_document(text: &str) -> Result<WaveformDocument> {
    let value: Value = serde_json::from_str(text)?;
    WaveformDocument::from_value(value)
}

/// Like [`parse_document`], but for raw bytes. Input that is not UTF-8 is a
/// [`WavetextError::Parse`] error.
pub fn parse_document_slice(bytes: &[u8]) -> Result<WaveformDocument> {
    let value: Value = serde_json::from_slice(bytes)?;
    WaveformDocument::from_value(value)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

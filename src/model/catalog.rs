//! Catalog data models
//!
//! Wire shapes returned by the transformation catalog backend.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level grouping of transformation blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

/// A parameter the transformation macro expects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroParameter {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// A single selectable transformation block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_column_types: Vec<String>,
    #[serde(default)]
    pub optional_column_types: Vec<String>,
    #[serde(default)]
    pub macro_parameters: Vec<MacroParameter>,
    #[serde(default)]
    pub examples_before: Vec<Example>,
    #[serde(default)]
    pub examples_after: Vec<Example>,
}

/// A before/after tabular illustration of a transformation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Example {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<ExampleRow>,
}

/// Example rows arrive either keyed by column or positionally
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExampleRow {
    Tuple(Vec<Value>),
    Mapping(Map<String, Value>),
}

/// Response envelope shared by every catalog request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: u16,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { status: 200, data }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Category ids are strings in some backends and integers in others
pub(crate) fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "invalid category id: {}",
            other
        ))),
    }
}

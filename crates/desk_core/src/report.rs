use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::{Map, Value};

use desk_logging::desk_debug;

use crate::display::display_string;

/// Analytics report returned by the backend. Every section is optional and an
/// absent (or `null`) section is simply not shown.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub key_metrics: Option<Map<String, Value>>,
    #[serde(default, deserialize_with = "labelled_entries")]
    pub trends_and_correlations: Option<Vec<(String, String)>>,
    #[serde(default)]
    pub recommendations: Option<Recommendations>,
}

impl Report {
    /// A payload that is not a mapping (`null`, or the bare text some backends
    /// send) carries no sections and yields an empty report.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Object(_) => serde_json::from_value(value),
            other => {
                desk_debug!("Report payload is {}, not a mapping; no sections", shape_name(&other));
                Ok(Self::default())
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.summary.is_none()
            && self.key_metrics.is_none()
            && self.trends_and_correlations.is_none()
            && self.recommendations.is_none()
    }
}

/// Recommendations arrive either as a list or as a labelled mapping; the shape is
/// fixed here, once, so rendering matches on the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recommendations {
    ByIndex(Vec<String>),
    ByKey(Vec<(String, String)>),
}

impl Recommendations {
    /// Classifies a raw value. A bare string is a one-item list.
    pub fn from_value(value: Value) -> Result<Self, String> {
        match value {
            Value::Array(items) => Ok(Self::ByIndex(items.iter().map(display_string).collect())),
            Value::Object(map) => Ok(Self::ByKey(into_labelled(map))),
            Value::String(text) => Ok(Self::ByIndex(vec![text])),
            other => Err(format!(
                "recommendations must be a list or a mapping, got {}",
                shape_name(&other)
            )),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::ByIndex(items) => items.len(),
            Self::ByKey(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'de> Deserialize<'de> for Recommendations {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(de::Error::custom)
    }
}

fn labelled_entries<'de, D>(deserializer: D) -> Result<Option<Vec<(String, String)>>, D::Error>
where
    D: Deserializer<'de>,
{
    let map: Option<Map<String, Value>> = Option::deserialize(deserializer)?;
    Ok(map.map(into_labelled))
}

fn into_labelled(map: Map<String, Value>) -> Vec<(String, String)> {
    map.into_iter()
        .map(|(key, value)| {
            let text = display_string(&value);
            (key, text)
        })
        .collect()
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

use serde::Serialize;
use serde_json::{Map, Value};

/// Keys the model is asked to produce. Only their presence is checked.
pub const REQUIRED_FIELDS: [&str; 5] = [
    "three_word_name",
    "five_word_name",
    "eight_word_name",
    "short_description",
    "long_description",
];

/// The model's JSON object, passed through to callers as-is.
///
/// Value types, word counts and bullet counts are only requested in the
/// prompt, never checked; keys beyond the five named ones are kept.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GenerationResult(Map<String, Value>);

impl GenerationResult {
    /// Wraps `object`, or names the first required key it lacks.
    pub fn from_object(object: Map<String, Value>) -> Result<Self, &'static str> {
        match REQUIRED_FIELDS.iter().find(|key| !object.contains_key(**key)) {
            Some(missing) => Err(*missing),
            None => Ok(Self(object)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Short name for log lines; empty when the model sent a non-string.
    pub fn three_word_name(&self) -> &str {
        self.get("three_word_name")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

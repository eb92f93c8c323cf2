//! Core domain types for theme color documentation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Documentation extracted from Markdown, keyed by color key.
///
/// Iteration order follows the first appearance of each key in the source
/// text; a repeated key overwrites the value in place.
pub type DocMap = IndexMap<String, String>;

/// Color key → color value, in the order of the source JSON object.
pub type ColorMap = serde_json::Map<String, Value>;

/// Color key → merged record, in [`ColorMap`] order.
pub type MergedMap = IndexMap<String, MergedRecord>;

// ---------------------------------------------------------------------------
// MergedRecord
// ---------------------------------------------------------------------------

/// A color value paired with its human-readable meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRecord {
    /// The color value exactly as it appeared in the theme file.
    pub color: Value,
    /// Documentation for the key, or `None` when the Markdown has no bullet for it.
    pub meaning: Option<String>,
}

impl MergedRecord {
    /// Field names in serialization order.
    pub const FIELDS: [&'static str; 2] = ["color", "meaning"];

    /// The record as `(field, value)` pairs, for row-oriented projection.
    pub fn fields(&self) -> Vec<(&'static str, Value)> {
        let meaning = match &self.meaning {
            Some(text) => Value::String(text.clone()),
            None => Value::Null,
        };
        vec![(Self::FIELDS[0], self.color.clone()), (Self::FIELDS[1], meaning)]
    }
}

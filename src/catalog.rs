//! The games catalog: record model and lenient JSON loading.
//!
//! The catalog is a flat JSON array of game records. Loading is forgiving
//! by design of the data file, not of the transport:
//!
//! - invalid JSON is a [`LoadError::Parse`]
//! - valid JSON that is not an array is an empty catalog
//! - array elements that are not objects become all-absent records
//! - text fields that are empty, `null`, `false` or zero are absent; other
//!   numbers and `true` are kept as their text, arrays and objects are absent
//! - `tags` that is not an array is an empty tag list

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::LoadError;
use crate::text::distinct_sorted;

/// Shown when a record has no game name.
pub const UNTITLED_GAME: &str = "İsimsiz Oyun";
/// Shown when a record has no student name.
pub const UNNAMED_STUDENT: &str = "İsimsiz Öğrenci";
/// Shown when a record has no description.
pub const NO_DESCRIPTION: &str = "Açıklama eklenmemiş.";
/// Tags rendered on a single card.
pub const CARD_TAG_LIMIT: usize = 3;

/// One student-made game, as published in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Game {
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub game_name: Option<String>,
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub student_name: Option<String>,
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_tags", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl Game {
    /// Build a record from any JSON value; non-objects yield an empty record.
    pub fn from_value(value: Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Display title, with placeholder.
    pub fn title(&self) -> &str {
        self.game_name.as_deref().unwrap_or(UNTITLED_GAME)
    }

    /// Display student name, with placeholder.
    pub fn student_label(&self) -> &str {
        self.student_name.as_deref().unwrap_or(UNNAMED_STUDENT)
    }

    /// Display description, with placeholder.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or(NO_DESCRIPTION)
    }

    /// The leading tags shown as pills on a card.
    pub fn card_tags(&self) -> &[String] {
        &self.tags[..self.tags.len().min(CARD_TAG_LIMIT)]
    }

    /// Exact, case-sensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) => number_text(&n),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    })
}

/// A number as a page would print it, or `None` for zero.
fn number_text(n: &serde_json::Number) -> Option<String> {
    if let Some(i) = n.as_i64() {
        return (i != 0).then(|| i.to_string());
    }
    if let Some(u) = n.as_u64() {
        return Some(u.to_string());
    }
    let f = n.as_f64()?;
    if f == 0.0 || !f.is_finite() {
        return None;
    }
    // Whole floats print without a fraction: `2048.0` reads as "2048".
    if f.fract() == 0.0 && f.abs() < 1e15 {
        Some((f as i64).to_string())
    } else {
        Some(f.to_string())
    }
}

fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) if !s.is_empty() => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// The full, ordered catalog loaded once per page view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    games: Vec<Game>,
}

impl Catalog {
    pub fn new(games: Vec<Game>) -> Self {
        Self { games }
    }

    /// Interpret a parsed JSON document as a catalog.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(items) => items.into_iter().map(Game::from_value).collect(),
            other => {
                warn!(
                    kind = json_kind(&other),
                    "catalog payload is not an array, using an empty catalog"
                );
                Self::default()
            }
        }
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Game> {
        self.games.iter()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Distinct, Turkish-sorted student names; records without one are skipped.
    pub fn student_names(&self) -> Vec<String> {
        distinct_sorted(self.games.iter().filter_map(|g| g.student_name.clone()))
    }

    /// Distinct, Turkish-sorted tags across all records.
    pub fn tags(&self) -> Vec<String> {
        distinct_sorted(self.games.iter().flat_map(|g| g.tags.iter().cloned()))
    }
}

impl FromIterator<Game> for Catalog {
    fn from_iter<I: IntoIterator<Item = Game>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Game;
    type IntoIter = std::slice::Iter<'a, Game>;

    fn into_iter(self) -> Self::IntoIter {
        self.games.iter()
    }
}

/// Parse a catalog response body.
pub fn parse_catalog(body: &str) -> Result<Catalog, LoadError> {
    let value: Value = serde_json::from_str(body)?;
    let catalog = Catalog::from_value(value);
    debug!(games = catalog.len(), "catalog parsed");
    Ok(catalog)
}

/// Read and parse a catalog file from disk.
pub fn load_catalog_file(path: impl AsRef<Path>) -> Result<Catalog, LoadError> {
    let path = path.as_ref();
    let body = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_catalog(&body)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! The game grid filter.
//!
//! Three conditions, all of which must hold for a record to be shown:
//!
//! - **query**: empty, or the normalized query occurs in the normalized
//!   game name, student name or description
//! - **student**: unset, or equal to the record's exact student name
//! - **tag**: unset, or contained verbatim in the record's tags
//!
//! Tag and student matching are exact and case-sensitive while the query is
//! not. Filtering borrows from the catalog and never reorders it.

use crate::catalog::{Catalog, Game};
use crate::text::{contains_normalized, normalize};

/// Current state of the game grid controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameFilter {
    /// Raw search box text.
    pub query: String,
    pub student: Option<String>,
    pub tag: Option<String>,
}

impl GameFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_student(mut self, student: impl Into<String>) -> Self {
        self.student = non_empty(student.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = non_empty(tag.into());
        self
    }

    /// Set the student from a dropdown value; `""` unsets it.
    pub fn set_student(&mut self, value: &str) {
        self.student = non_empty(value.to_string());
    }

    /// Set the tag from a dropdown value or chip; `""` unsets it.
    pub fn set_tag(&mut self, value: &str) {
        self.tag = non_empty(value.to_string());
    }

    /// Reset every control.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_clear(&self) -> bool {
        normalize(Some(self.query.as_str())).is_empty()
            && self.student.is_none()
            && self.tag.is_none()
    }

    /// Whether a single record passes all three conditions.
    pub fn matches(&self, game: &Game) -> bool {
        self.matcher().matches(game)
    }

    /// The matching records, in catalog order.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Game> {
        let matcher = self.matcher();
        catalog.iter().filter(|game| matcher.matches(game)).collect()
    }

    fn matcher(&self) -> Matcher<'_> {
        Matcher {
            query: normalize(Some(self.query.as_str())),
            student: self.student.as_deref(),
            tag: self.tag.as_deref(),
        }
    }
}

/// A filter with its query normalized once per pass.
struct Matcher<'f> {
    query: String,
    student: Option<&'f str>,
    tag: Option<&'f str>,
}

impl Matcher<'_> {
    fn matches(&self, game: &Game) -> bool {
        let query_ok = self.query.is_empty()
            || contains_normalized(game.game_name.as_deref(), &self.query)
            || contains_normalized(game.student_name.as_deref(), &self.query)
            || contains_normalized(game.description.as_deref(), &self.query);

        let student_ok = self
            .student
            .is_none_or(|s| game.student_name.as_deref() == Some(s));

        let tag_ok = self.tag.is_none_or(|t| game.has_tag(t));

        query_ok && student_ok && tag_ok
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::parse_catalog;
    use crate::text::normalize;

    fn sample() -> Catalog {
        parse_catalog(
            r#"[
            {"gameName": "Uzay Koşusu", "studentName": "Ada", "description": "Hızlı bir PLATFORM oyunu", "tags": ["platform", "2D"]},
            {"gameName": "Labirent", "studentName": "Beth", "description": "Bulmaca", "tags": ["bulmaca"]},
            {"gameName": "Kale", "studentName": "Ada", "tags": ["strateji", "2D"]},
            {"description": "isimsiz kayıt"}
        ]"#,
        )
        .unwrap()
    }

    fn names(games: &[&Game]) -> Vec<String> {
        games.iter().map(|g| g.title().to_string()).collect()
    }

    #[test]
    fn test_clear_filter_returns_everything_in_order() {
        let catalog = sample();
        let result = GameFilter::new().apply(&catalog);
        assert_eq!(result.len(), catalog.len());
        assert_eq!(
            names(&result),
            vec!["Uzay Koşusu", "Labirent", "Kale", "İsimsiz Oyun"]
        );
    }

    #[test]
    fn test_query_is_case_and_whitespace_insensitive() {
        let catalog = sample();
        let result = GameFilter::new().with_query("  platform ").apply(&catalog);
        assert_eq!(names(&result), vec!["Uzay Koşusu"]);
    }

    #[test]
    fn test_query_matches_student_and_description() {
        let catalog = sample();
        assert_eq!(GameFilter::new().with_query("beth").apply(&catalog).len(), 1);
        assert_eq!(GameFilter::new().with_query("bulmaca").apply(&catalog).len(), 1);
    }

    #[test]
    fn test_query_ignores_placeholders() {
        let catalog = sample();
        // The last record has no name; only its description mentions "isimsiz".
        let result = GameFilter::new().with_query("isimsiz oyun").apply(&catalog);
        assert!(result.is_empty());
    }

    #[test]
    fn test_query_partitions_catalog() {
        let catalog = sample();
        for query in ["a", "kale", "oyun", "zzz", "2d"] {
            let filter = GameFilter::new().with_query(query);
            let q = normalize(Some(query));
            for game in catalog.iter() {
                let hit = [&game.game_name, &game.student_name, &game.description]
                    .iter()
                    .any(|field| normalize(field.as_deref()).contains(&q));
                assert_eq!(filter.matches(game), hit, "query {query:?}");
            }
        }
    }

    #[test]
    fn test_query_finds_numeric_game_name() {
        let catalog = parse_catalog(r#"[{"gameName": 2048}, {"gameName": "Kale"}]"#).unwrap();
        let result = GameFilter::new().with_query("2048").apply(&catalog);
        assert_eq!(names(&result), vec!["2048"]);
    }

    #[test]
    fn test_student_filter_is_exact() {
        let catalog = sample();
        let result = GameFilter::new().with_student("Ada").apply(&catalog);
        assert_eq!(names(&result), vec!["Uzay Koşusu", "Kale"]);
        assert!(GameFilter::new().with_student("ada").apply(&catalog).is_empty());
    }

    #[test]
    fn test_tag_filter_is_exact() {
        let catalog = sample();
        let result = GameFilter::new().with_tag("2D").apply(&catalog);
        assert_eq!(names(&result), vec!["Uzay Koşusu", "Kale"]);
        assert!(GameFilter::new().with_tag("2d").apply(&catalog).is_empty());
    }

    #[test]
    fn test_conditions_are_conjunctive() {
        let catalog = sample();
        let filter = GameFilter::new()
            .with_student("Ada")
            .with_tag("2D")
            .with_query("kale");
        assert_eq!(names(&filter.apply(&catalog)), vec!["Kale"]);
    }

    #[test]
    fn test_empty_dropdown_value_unsets() {
        let mut filter = GameFilter::new().with_student("Ada").with_tag("2D");
        filter.set_student("");
        filter.set_tag("");
        assert_eq!(filter, GameFilter::default());
    }

    #[test]
    fn test_clear_restores_full_catalog() {
        let catalog = sample();
        let mut filter = GameFilter::new()
            .with_query("kale")
            .with_student("Ada")
            .with_tag("strateji");
        assert!(!filter.is_clear());
        filter.clear();
        assert!(filter.is_clear());
        assert_eq!(filter.apply(&catalog), catalog.iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_reapplying_is_idempotent() {
        let catalog = sample();
        let filter = GameFilter::new().with_tag("2D");
        assert_eq!(filter.apply(&catalog), filter.apply(&catalog));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(GameFilter::new().apply(&catalog).is_empty());
    }
}

//! Student ranking for the students page.

use std::collections::HashMap;

use crate::catalog::{Catalog, Game};
use crate::text::{compare_tr, contains_normalized, normalize};

/// All games published under one student name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentSummary {
    /// Student name, or the unnamed-student placeholder.
    pub name: String,
    /// The student's games in catalog order.
    pub games: Vec<Game>,
}

impl StudentSummary {
    pub fn count(&self) -> usize {
        self.games.len()
    }
}

/// Group the catalog by student and rank by game count.
///
/// Records without a student name are grouped under the placeholder.
/// Ordering: higher count first, ties by Turkish collation of the name.
pub fn aggregate(catalog: &Catalog) -> Vec<StudentSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut summaries: Vec<StudentSummary> = Vec::new();

    for game in catalog {
        let name = game.student_label();
        let slot = *index.entry(name).or_insert_with(|| {
            summaries.push(StudentSummary {
                name: name.to_string(),
                games: Vec::new(),
            });
            summaries.len() - 1
        });
        summaries[slot].games.push(game.clone());
    }

    summaries.sort_by(|a, b| {
        b.count()
            .cmp(&a.count())
            .then_with(|| compare_tr(&a.name, &b.name))
    });
    summaries
}

/// Ranked students whose name contains `query` (normalized).
pub fn filter_students<'a>(
    students: &'a [StudentSummary],
    query: &str,
) -> Vec<&'a StudentSummary> {
    let query = normalize(Some(query));
    students
        .iter()
        .filter(|s| query.is_empty() || contains_normalized(Some(s.name.as_str()), &query))
        .collect()
}

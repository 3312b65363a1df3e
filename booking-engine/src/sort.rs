//! Sort Engine
//!
//! Orders catalog lessons by a chosen field and direction. Always operates
//! on a copy; the caller's collection is never mutated.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use shared::Lesson;

/// Sortable lesson fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Topic,
    Subject,
    Location,
    Price,
    Space,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Case-insensitive string comparison for display fields
fn cmp_str(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn compare(a: &Lesson, b: &Lesson, field: SortField) -> Ordering {
    match field {
        SortField::Topic => cmp_str(&a.topic, &b.topic),
        SortField::Subject => cmp_str(&a.subject, &b.subject),
        SortField::Location => cmp_str(&a.location, &b.location),
        SortField::Price => a.price.total_cmp(&b.price),
        SortField::Space => a.space.cmp(&b.space),
    }
}

/// Return the lessons ordered by `field` in `direction`.
///
/// Stable: lessons that compare equal keep their relative input order.
pub fn sort_lessons(lessons: &[Lesson], field: SortField, direction: SortDirection) -> Vec<Lesson> {
    let mut sorted = lessons.to_vec();
    sorted.sort_by(|a, b| {
        let ord = compare(a, b, field);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    sorted
}

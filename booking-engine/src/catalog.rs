//! Catalog Store
//!
//! Holds the current lesson list. The list is only ever replaced wholesale
//! by a full or search fetch, and mutated in place by cart operations.

use shared::Lesson;

/// In-memory lesson catalog
#[derive(Debug, Default)]
pub struct Catalog {
    lessons: Vec<Lesson>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list with a freshly fetched one.
    ///
    /// Server data is authoritative: this may overwrite locally-decremented
    /// `space` values, which is the intended trust boundary.
    pub fn replace(&mut self, lessons: Vec<Lesson>) {
        self.lessons = lessons;
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn find(&self, lesson_id: i64) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == lesson_id)
    }

    pub fn find_mut(&mut self, lesson_id: i64) -> Option<&mut Lesson> {
        self.lessons.iter_mut().find(|l| l.id == lesson_id)
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}

//! Cart Reservation Manager - cart side
//!
//! Each entry reserves exactly one unit of a lesson and copies the fields
//! the order payload needs at reservation time. Entries keep insertion
//! order; removal is by explicit position because several entries can
//! reference the same lesson.

use std::collections::BTreeMap;

use shared::Lesson;

/// One reserved unit of a lesson
#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    pub lesson_id: i64,
    pub topic: String,
    pub price: f64,
}

impl CartEntry {
    pub fn from_lesson(lesson: &Lesson) -> Self {
        Self {
            lesson_id: lesson.id,
            topic: lesson.topic.clone(),
            price: lesson.price,
        }
    }
}

/// Ordered sequence of reservations
#[derive(Debug, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: CartEntry) {
        self.entries.push(entry);
    }

    /// Remove the entry at `position`, if any.
    pub fn remove(&mut self, position: usize) -> Option<CartEntry> {
        if position < self.entries.len() {
            Some(self.entries.remove(position))
        } else {
            None
        }
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entry counts grouped by lesson id.
    ///
    /// Used both for display totals and for building the order payload;
    /// BTreeMap keeps the payload line order deterministic.
    pub fn quantity_by_lesson(&self) -> BTreeMap<i64, u32> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.lesson_id).or_insert(0) += 1;
        }
        counts
    }

    /// Sum of prices over all entries (one price per reserved unit).
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.price).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(lesson_id: i64, price: f64) -> CartEntry {
        CartEntry {
            lesson_id,
            topic: format!("Lesson {lesson_id}"),
            price,
        }
    }

    #[test]
    fn quantities_group_by_lesson_id() {
        let mut cart = Cart::new();
        cart.push(entry(1, 90.0)); // A
        cart.push(entry(2, 40.0)); // B
        cart.push(entry(1, 90.0)); // A again

        let counts = cart.quantity_by_lesson();
        assert_eq!(counts.get(&1), Some(&2));
        assert_eq!(counts.get(&2), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn total_counts_every_reserved_unit() {
        let mut cart = Cart::new();
        cart.push(entry(1, 90.0));
        cart.push(entry(1, 90.0));
        cart.push(entry(2, 40.0));
        assert_eq!(cart.total(), 220.0);
    }

    #[test]
    fn removal_is_by_position_not_value() {
        let mut cart = Cart::new();
        cart.push(entry(1, 90.0));
        cart.push(entry(1, 90.0));
        cart.push(entry(2, 40.0));

        let removed = cart.remove(1).unwrap();
        assert_eq!(removed.lesson_id, 1);
        // The other entry for lesson 1 survives, order preserved.
        let ids: Vec<i64> = cart.entries().iter().map(|e| e.lesson_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn out_of_range_removal_is_a_noop() {
        let mut cart = Cart::new();
        cart.push(entry(1, 90.0));
        assert!(cart.remove(5).is_none());
        assert_eq!(cart.len(), 1);
    }
}

//! # Tables
//!
//! One `Table` per collection: rows keyed by id plus the next id to hand out.
//!
//! ## Ordering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  next_id only ever grows and deleted ids are never handed out again,    │
//! │  so BTreeMap key order == insertion order.                             │
//! │                                                                         │
//! │  insert A → 1   insert B → 2   delete 1   insert C → 3                 │
//! │  rows: { 2: B, 3: C }   iteration: B, C                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use tiket_core::{Id, Patch, Record};

#[derive(Debug, Clone)]
pub(crate) struct Table<T> {
    rows: BTreeMap<Id, T>,
    next_id: Id,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Table {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Record> Table<T> {
    /// Assigns the next id, builds the record with it and stores it.
    pub(crate) fn insert_with(&mut self, build: impl FnOnce(Id) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;

        let record = build(id);
        self.rows.insert(id, record.clone());
        record
    }

    pub(crate) fn get(&self, id: Id) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    /// All rows in insertion order.
    pub(crate) fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    /// The first `limit` rows in insertion order.
    pub(crate) fn first(&self, limit: usize) -> Vec<T> {
        self.rows.values().take(limit).cloned().collect()
    }

    pub(crate) fn filter(&self, mut predicate: impl FnMut(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|r| predicate(r)).cloned().collect()
    }

    pub(crate) fn find(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<T> {
        self.rows.values().find(|r| predicate(r)).cloned()
    }

    /// Merges `patch` over the stored record and stores the result as a
    /// new instance. `None` when the id is unknown.
    pub(crate) fn update<P: Patch<T>>(&mut self, id: Id, patch: P) -> Option<T> {
        let mut merged = self.rows.get(&id)?.clone();
        patch.apply_to(&mut merged);
        self.rows.insert(id, merged.clone());
        Some(merged)
    }

    /// Removes a row. The id is not reused afterwards.
    pub(crate) fn remove(&mut self, id: Id) -> bool {
        self.rows.remove(&id).is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiket_core::{Category, NewCategory};

    fn category(name: &str) -> NewCategory {
        NewCategory {
            name: name.to_string(),
            icon_class: "fas fa-music".to_string(),
        }
    }

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let mut table: Table<Category> = Table::default();
        let a = table.insert_with(|id| category("Pop").into_record(id));
        let b = table.insert_with(|id| category("Rock").into_record(id));
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_deleted_ids_are_not_reused() {
        let mut table: Table<Category> = Table::default();
        table.insert_with(|id| category("Pop").into_record(id));
        table.insert_with(|id| category("Rock").into_record(id));

        assert!(table.remove(2));
        assert!(!table.remove(2));

        let c = table.insert_with(|id| category("Folk").into_record(id));
        assert_eq!(c.id, 3);
        assert!(table.get(2).is_none());
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut table: Table<Category> = Table::default();
        for name in ["Pop", "Rock", "Folk", "Hip-Hop"] {
            table.insert_with(|id| category(name).into_record(id));
        }
        table.remove(1);

        let names: Vec<String> = table.all().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Rock", "Folk", "Hip-Hop"]);

        let first: Vec<String> = table.first(2).into_iter().map(|c| c.name).collect();
        assert_eq!(first, vec!["Rock", "Folk"]);
    }
}

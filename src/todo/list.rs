use std::collections::HashSet;

use crate::error::{Error, Result};

use super::compare::{DateComparator, SortDirection};
use super::item::{Item, ItemId};

/// The authoritative ordered collection of to-do items.
///
/// A `Vec` is the primary storage because collection order is meaningful:
/// it is exactly what the table projection mirrors, and a sort rewrites it
/// in place without recreating items. The side set of ids gives O(1)
/// duplicate detection and holds no item data; it is kept in sync with the
/// `Vec` during every mutating operation.
#[derive(Debug)]
pub struct TodoList {
    items: Vec<Item>,
    ids: HashSet<ItemId>,
    /// Next id handed out to a new item. Seeded above the largest id seen,
    /// and never decremented, so removals cannot lead to id reuse.
    next_id: ItemId,
}

impl Default for TodoList {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            ids: HashSet::new(),
            next_id: 1,
        }
    }
}

impl TodoList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from items supplied by the persistence collaborator.
    ///
    /// Insertion order is preserved as collection order.
    ///
    /// # Errors
    /// `Error::DuplicateId` if two items share an id. The partially built
    /// list is discarded.
    pub fn from_items(items: Vec<Item>) -> Result<Self> {
        let mut list = Self::new();
        for item in items {
            list.insert(item)?;
        }
        Ok(list)
    }

    fn insert(&mut self, item: Item) -> Result<()> {
        if !self.ids.insert(item.id()) {
            return Err(Error::DuplicateId { id: item.id() });
        }
        if item.id() >= self.next_id {
            self.next_id = item.id() + 1;
        }
        self.items.push(item);
        Ok(())
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in collection order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Find an item by id.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn allocate_id(&mut self) -> ItemId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Create or update an item.
    ///
    /// An item carrying the `UNASSIGNED` sentinel is given a fresh unique id
    /// and appended. An item with a known id is merged into the stored item
    /// in place - identity and collection position stay untouched.
    ///
    /// # Returns
    /// The id of the created or updated item.
    ///
    /// # Errors
    /// `Error::ItemNotFound` if the id is set but unknown; the list is left
    /// unchanged.
    pub fn save(&mut self, item: Item) -> Result<ItemId> {
        if item.is_unassigned() {
            let mut item = item;
            let id = self.allocate_id();
            item.assign_id(id);
            self.ids.insert(id);
            self.items.push(item);
            Ok(id)
        } else {
            let id = item.id();
            let existing = self
                .items
                .iter_mut()
                .find(|stored| stored.id() == id)
                .ok_or(Error::ItemNotFound { id })?;
            existing.merge(&item);
            Ok(id)
        }
    }

    /// Remove every completed item, preserving the relative order of the
    /// rest.
    ///
    /// # Returns
    /// The number of items removed.
    pub fn remove_completed(&mut self) -> usize {
        let ids = &mut self.ids;
        let before = self.items.len();
        self.items.retain(|item| {
            let keep = !item.is_done();
            if !keep {
                ids.remove(&item.id());
            }
            keep
        });
        before - self.items.len()
    }

    /// Reorder the collection by date, in place.
    ///
    /// The sort is stable: items with equal dates (or both undated) keep
    /// their current relative order. No items are removed or reinserted, so
    /// identity survives the reorder.
    pub fn sort(&mut self, direction: SortDirection) {
        let comparator = DateComparator::new(direction);
        self.items.sort_by(|a, b| comparator.compare(a, b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ids(list: &TodoList) -> Vec<ItemId> {
        list.items().iter().map(Item::id).collect()
    }

    #[test]
    fn from_items_preserves_order() {
        let list = TodoList::from_items(vec![
            Item::new(5, "five"),
            Item::new(2, "two"),
            Item::new(9, "nine"),
        ])
        .unwrap();
        assert_eq!(ids(&list), vec![5, 2, 9]);
    }

    #[test]
    fn from_items_rejects_duplicate_ids() {
        let result = TodoList::from_items(vec![Item::new(1, "a"), Item::new(1, "b")]);
        assert_eq!(result.unwrap_err(), Error::DuplicateId { id: 1 });
    }

    #[test]
    fn save_unassigned_allocates_fresh_id() {
        let mut list = TodoList::from_items(vec![Item::new(4, "existing")]).unwrap();

        let id = list.save(Item::new(Item::UNASSIGNED, "new entry")).unwrap();

        assert_ne!(id, Item::UNASSIGNED);
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(id).unwrap().description(), "new entry");
        // no two items share an id
        let mut seen: Vec<ItemId> = ids(&list);
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), list.len());
    }

    #[test]
    fn allocated_ids_never_reused_after_removal() {
        let mut list = TodoList::new();
        let first = list.save(Item::new(Item::UNASSIGNED, "a").with_done(true)).unwrap();
        list.remove_completed();
        let second = list.save(Item::new(Item::UNASSIGNED, "b")).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn save_existing_merges_in_place() {
        let mut list = TodoList::from_items(vec![
            Item::new(1, "first"),
            Item::new(2, "second"),
            Item::new(3, "third"),
        ])
        .unwrap();

        let edited = Item::new(2, "second, edited")
            .with_date(date(2026, 8, 4))
            .with_done(true);
        list.save(edited).unwrap();

        // position and identity untouched, fields written through
        assert_eq!(ids(&list), vec![1, 2, 3]);
        let stored = list.get(2).unwrap();
        assert_eq!(stored.description(), "second, edited");
        assert_eq!(stored.date(), Some(date(2026, 8, 4)));
        assert!(stored.is_done());
    }

    #[test]
    fn save_unknown_id_fails_and_leaves_list_unchanged() {
        let mut list = TodoList::from_items(vec![Item::new(1, "only")]).unwrap();

        let result = list.save(Item::new(42, "phantom"));

        assert_eq!(result.unwrap_err(), Error::ItemNotFound { id: 42 });
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(1).unwrap().description(), "only");
    }

    #[test]
    fn remove_completed_keeps_relative_order() {
        let mut list = TodoList::from_items(vec![
            Item::new(1, "keep"),
            Item::new(2, "drop").with_done(true),
            Item::new(3, "keep too"),
            Item::new(4, "drop too").with_done(true),
        ])
        .unwrap();

        let removed = list.remove_completed();

        assert_eq!(removed, 2);
        assert_eq!(ids(&list), vec![1, 3]);
        assert!(list.items().iter().all(|item| !item.is_done()));
    }

    #[test]
    fn remove_completed_on_empty_list() {
        let mut list = TodoList::new();
        assert_eq!(list.remove_completed(), 0);
        assert!(list.is_empty());
    }

    #[test]
    fn sort_ascending_and_descending() {
        let mut list = TodoList::from_items(vec![
            Item::new(1, "monday").with_date(date(2026, 8, 3)),
            Item::new(2, "wednesday").with_date(date(2026, 8, 5)).with_done(true),
            Item::new(3, "tuesday").with_date(date(2026, 8, 4)),
        ])
        .unwrap();

        list.sort(SortDirection::Ascending);
        assert_eq!(ids(&list), vec![1, 3, 2]);

        list.sort(SortDirection::Descending);
        assert_eq!(ids(&list), vec![2, 3, 1]);
    }

    #[test]
    fn sort_then_remove_completed() {
        let mut list = TodoList::from_items(vec![
            Item::new(1, "monday").with_date(date(2026, 8, 3)),
            Item::new(2, "wednesday").with_date(date(2026, 8, 5)).with_done(true),
            Item::new(3, "tuesday").with_date(date(2026, 8, 4)),
        ])
        .unwrap();

        list.sort(SortDirection::Ascending);
        list.remove_completed();
        assert_eq!(ids(&list), vec![1, 3]);
    }

    #[test]
    fn sort_is_stable_for_equal_dates() {
        let shared = date(2026, 8, 3);
        let mut list = TodoList::from_items(vec![
            Item::new(1, "first in").with_date(shared),
            Item::new(2, "later").with_date(date(2026, 8, 20)),
            Item::new(3, "second in").with_date(shared),
            Item::new(4, "third in").with_date(shared),
        ])
        .unwrap();

        list.sort(SortDirection::Ascending);

        assert_eq!(ids(&list), vec![1, 3, 4, 2]);
    }

    #[test]
    fn sort_puts_undated_first_in_both_directions() {
        let mut list = TodoList::from_items(vec![
            Item::new(1, "dated").with_date(date(2026, 8, 3)),
            Item::new(2, "undated"),
        ])
        .unwrap();

        list.sort(SortDirection::Ascending);
        assert_eq!(ids(&list), vec![2, 1]);

        list.sort(SortDirection::Descending);
        assert_eq!(ids(&list), vec![2, 1]);
    }
}

//! Table projection of the item collection
//!
//! The view renders a positional table; this module derives it. A row is a
//! strongly typed record of the four item fields in display order. The
//! projection is regenerated wholesale from every `items` publish - it
//! carries no state beyond "mirror of the collection at the last publish",
//! so the view can never show a stale mixture of old and new rows.

use chrono::NaiveDate;

use crate::messaging::{Message, Messenger};
use crate::todo::{Item, ItemId};

/// One table row, derived 1:1 from an item in collection order.
///
/// The id is kept in the row for the edit round-trip but is not displayed;
/// the visible columns are done, date and description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: ItemId,
    pub done: bool,
    pub date: Option<NaiveDate>,
    pub description: String,
}

impl Row {
    /// Derive a row from an item.
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: item.id(),
            done: item.is_done(),
            date: item.date(),
            description: item.description().to_string(),
        }
    }

    /// Reconstruct the item this row was derived from.
    pub fn to_item(&self) -> Item {
        let mut item = Item::new(self.id, self.description.clone());
        item.set_date(self.date);
        item.set_done(self.done);
        item
    }
}

/// Row-indexed mirror of the item collection.
#[derive(Debug, Clone, Default)]
pub struct TableProjection {
    rows: Vec<Row>,
}

impl TableProjection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the projection with one derived from `items`.
    ///
    /// The previous rows are discarded entirely and the row count becomes
    /// the collection length - there is no partial or differential update.
    /// An empty collection yields zero rows.
    pub fn reload(&mut self, items: &[Item]) {
        self.rows = items.iter().map(Row::from_item).collect();
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Reconstruct the item behind row index `row`.
    ///
    /// # Panics
    /// If `row` is outside the current projection. The view only hands back
    /// indices it is currently displaying; anything else is a caller bug,
    /// not a recoverable condition.
    pub fn item_at(&self, row: usize) -> Item {
        self.rows[row].to_item()
    }

    /// Flip the done flag of the item at `row` and hand the result to the
    /// bus for saving.
    ///
    /// The projection itself is not touched here; it is regenerated when
    /// the collaborator republishes `items` with the saved flag.
    pub fn toggle_done_at(&self, row: usize, messenger: &Messenger) {
        let mut item = self.item_at(row);
        item.toggle_done();
        messenger.publish(Message::SaveItem(item));
    }
}

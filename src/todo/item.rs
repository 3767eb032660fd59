use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Integer identifier of a to-do item, unique within a list.
pub type ItemId = i32;

/// A single to-do entry
///
/// Identity (`id`) is assigned exactly once, by the list that accepts the
/// item; every other field is freely editable. The model performs no
/// validation of its own - an empty description is legal, and whether it is
/// sensible is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique id, or `Item::UNASSIGNED` for an item not yet in a list
    id: ItemId,
    /// Free-form description shown in the table
    description: String,
    /// Due date; `None` when the item never had one assigned
    date: Option<NaiveDate>,
    /// Completion flag
    done: bool,
}

impl Item {
    /// Sentinel id of an item that has not been accepted into a list yet.
    pub const UNASSIGNED: ItemId = -1;

    /// Create an item with no date, not done.
    pub fn new(id: ItemId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            date: None,
            done: false,
        }
    }

    /// Set the due date during construction.
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Set the done flag during construction.
    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    /// True while the item still carries the `UNASSIGNED` sentinel.
    pub fn is_unassigned(&self) -> bool {
        self.id == Self::UNASSIGNED
    }

    /// Give the item its permanent id. Called once by the accepting list.
    pub(crate) fn assign_id(&mut self, id: ItemId) {
        self.id = id;
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.date = date;
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    /// Flip the done flag.
    pub fn toggle_done(&mut self) {
        self.done = !self.done;
    }

    /// Copy `description`, `done` and `date` from `other`, keeping this
    /// item's id.
    ///
    /// Used when an edit dialog hands back a modified copy that must be
    /// written into the authoritative item without reassigning identity.
    pub fn merge(&mut self, other: &Item) {
        self.description = other.description.clone();
        self.done = other.done;
        self.date = other.date;
    }
}

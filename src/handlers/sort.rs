//! `sortAscending` / `sortDescending` handler.

use log::debug;

use crate::TodoController;
use crate::todo::SortDirection;

impl TodoController {
    /// Reorder the collection in place and republish.
    ///
    /// The reorder completes before the `items` publish, so the view never
    /// sees a half-sorted collection.
    pub(crate) fn handle_sort(&self, direction: SortDirection) {
        self.list.borrow_mut().sort(direction);
        debug!("sorted {direction:?}");
        self.publish_items();
    }
}

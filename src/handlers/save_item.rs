//! `saveItem` handler: create or merge-update one item.

use log::{debug, error};

use crate::TodoController;
use crate::todo::Item;

impl TodoController {
    /// Accept a new or edited item from the view.
    ///
    /// An item carrying the unassigned sentinel is appended under a fresh
    /// id; a known id is merged into the stored item. The collection is
    /// republished only when the save went through - on an invariant
    /// violation the operation is aborted and the view keeps the last
    /// consistent projection.
    pub(crate) fn handle_save_item(&self, item: Item) {
        let saved = self.list.borrow_mut().save(item);
        match saved {
            Ok(id) => {
                debug!("saved item {id}");
                self.publish_items();
            }
            Err(err) => error!("saveItem aborted: {err}"),
        }
    }
}

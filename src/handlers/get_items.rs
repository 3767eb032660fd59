//! `getItems` handler: reply with the current collection.

use crate::TodoController;

impl TodoController {
    pub(crate) fn handle_get_items(&self) {
        self.publish_items();
    }
}

//! `removeCompletedItems` handler.

use log::debug;

use crate::TodoController;

impl TodoController {
    /// Drop every completed item and republish the remainder in order.
    pub(crate) fn handle_remove_completed(&self) {
        let removed = self.list.borrow_mut().remove_completed();
        debug!("removed {removed} completed item(s)");
        self.publish_items();
    }
}

//! To-do list core
//!
//! Item data model, date ordering and the list-synchronization logic that
//! keeps an in-memory to-do collection consistent, sortable and projected
//! into a tabular view. The window toolkit and the persistence layer are
//! external collaborators reached through a typed message bus; this crate
//! never renders and never touches a file.
//!
//! # Architecture
//!
//! - **Messaging layer**: `messaging` - topics, messages and the bus
//! - **Domain layer**: `todo` - item model, comparator and collection
//! - **Projection layer**: `table` - row type and table projection
//!
//! Everything is single-threaded and synchronous: a mutation completes, the
//! full collection is republished under `items`, and the view regenerates
//! its projection from that publish.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use todolist::{Item, Message, Messenger, TodoController, TodoList};
//!
//! let messenger = Rc::new(Messenger::new());
//! let list = TodoList::from_items(vec![Item::new(1, "write report")]).unwrap();
//! let controller = TodoController::new(Rc::clone(&messenger), list);
//! controller.start();
//!
//! // The view would publish this when its edit dialog closes.
//! messenger.publish(Message::SaveItem(Item::new(Item::UNASSIGNED, "buy milk")));
//! ```

pub mod error;
pub mod formatting;
mod handlers;
pub mod logging;
pub mod messaging;
pub mod table;
pub mod todo;

use std::cell::RefCell;
use std::rc::Rc;

pub use error::{Error, Result};
pub use messaging::{Message, Messenger, Subscriber, Topic};
pub use table::{Row, TableProjection};
pub use todo::{DateComparator, Item, ItemId, SortDirection, TodoList};

/// The collaborator that owns the authoritative item collection.
///
/// Subscribes to the topics the view publishes, applies each mutation to
/// its [`TodoList`], and republishes the whole collection under `items` so
/// the view regenerates its projection. There are no partial updates: a
/// failed mutation publishes nothing and the view keeps rendering the last
/// consistent state.
pub struct TodoController {
    pub(crate) messenger: Rc<Messenger>,
    pub(crate) list: RefCell<TodoList>,
}

impl TodoController {
    /// Create a controller over `list` and subscribe it to the bus.
    pub fn new(messenger: Rc<Messenger>, list: TodoList) -> Rc<Self> {
        let controller = Rc::new(Self {
            messenger,
            list: RefCell::new(list),
        });
        let subscriber: Rc<dyn Subscriber> = controller.clone();
        for topic in [
            Topic::GetItems,
            Topic::SaveItem,
            Topic::RemoveCompletedItems,
            Topic::SortAscending,
            Topic::SortDescending,
        ] {
            controller.messenger.subscribe(topic, &subscriber);
        }
        controller
    }

    /// Announce that the app is initialized. The view answers `ready` with
    /// `getItems`, which round-trips into the first `items` publish.
    pub fn start(&self) {
        self.messenger.publish(Message::Ready);
    }

    /// Publish the collection under `items`.
    ///
    /// The borrow on the list ends before publishing, so subscribers are
    /// free to publish back into the bus while handling the message.
    pub(crate) fn publish_items(&self) {
        let items = self.list.borrow().items().to_vec();
        self.messenger.publish(Message::Items(items));
    }
}

impl Subscriber for TodoController {
    fn receive(&self, message: &Message) {
        match message {
            Message::GetItems => self.handle_get_items(),
            Message::SaveItem(item) => self.handle_save_item(item.clone()),
            Message::RemoveCompletedItems => self.handle_remove_completed(),
            Message::SortAscending => self.handle_sort(SortDirection::Ascending),
            Message::SortDescending => self.handle_sort(SortDirection::Descending),
            // view-facing topics; the controller only publishes these
            Message::Ready | Message::Items(_) => {}
        }
    }
}

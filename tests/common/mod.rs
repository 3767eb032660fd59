//! Common test utilities for integration tests

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;
use todolist::{Item, ItemId, Message, Messenger, Subscriber, TodoController, TodoList, Topic};

/// A stand-in for the view: records every `items` publish it sees.
pub struct RecordingView {
    pub published: RefCell<Vec<Vec<Item>>>,
}

impl RecordingView {
    pub fn subscribe(messenger: &Rc<Messenger>) -> Rc<Self> {
        let view = Rc::new(Self {
            published: RefCell::new(Vec::new()),
        });
        let subscriber: Rc<dyn Subscriber> = view.clone();
        messenger.subscribe(Topic::Items, &subscriber);
        view
    }

    /// Number of `items` publishes seen so far.
    pub fn publish_count(&self) -> usize {
        self.published.borrow().len()
    }

    /// The most recent `items` payload (empty if none arrived yet).
    pub fn latest(&self) -> Vec<Item> {
        self.published.borrow().last().cloned().unwrap_or_default()
    }

    /// Ids of the most recent payload, in published order.
    pub fn latest_ids(&self) -> Vec<ItemId> {
        self.latest().iter().map(Item::id).collect()
    }
}

impl Subscriber for RecordingView {
    fn receive(&self, message: &Message) {
        if let Message::Items(items) = message {
            self.published.borrow_mut().push(items.clone());
        }
    }
}

/// Wire a controller over `items` with a recording view on the bus.
pub fn wired(items: Vec<Item>) -> (Rc<Messenger>, Rc<TodoController>, Rc<RecordingView>) {
    let messenger = Rc::new(Messenger::new());
    let view = RecordingView::subscribe(&messenger);
    let list = TodoList::from_items(items).expect("test items have unique ids");
    let controller = TodoController::new(Rc::clone(&messenger), list);
    (messenger, controller, view)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Three items across one week; the Wednesday one is already completed.
pub fn week_items() -> Vec<Item> {
    vec![
        Item::new(1, "Monday errand").with_date(date(2026, 8, 3)),
        Item::new(2, "Wednesday errand")
            .with_date(date(2026, 8, 5))
            .with_done(true),
        Item::new(3, "Tuesday errand").with_date(date(2026, 8, 4)),
    ]
}

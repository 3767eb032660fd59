//! Typed publish/subscribe boundary between the core and its collaborators
//!
//! The view and the controller talk through named topics rather than direct
//! references, so neither side knows the other's type. This is a typed
//! event emitter for a single-threaded UI, not a distributed bus: every
//! publish synchronously delivers to the current subscribers of the
//! message's topic, in subscription order, and returns only when all of
//! them have run. Handlers may publish further messages - delivery is
//! re-entrant.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use crate::todo::Item;

/// Topics of the view/collaborator contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    /// App initialized; the view should request data.
    Ready,
    /// View asks for the current collection.
    GetItems,
    /// Full ordered item list; the view regenerates its table from it.
    Items,
    /// Create (unassigned id) or merge-update one item.
    SaveItem,
    /// Drop every item whose done flag is set.
    RemoveCompletedItems,
    /// Reorder the collection by date, earliest first.
    SortAscending,
    /// Reorder the collection by date, latest first.
    SortDescending,
}

/// A message on the bus: one of the topics, with its payload.
#[derive(Debug, Clone)]
pub enum Message {
    Ready,
    GetItems,
    Items(Vec<Item>),
    SaveItem(Item),
    RemoveCompletedItems,
    SortAscending,
    SortDescending,
}

impl Message {
    /// The topic this message is delivered under.
    pub fn topic(&self) -> Topic {
        match self {
            Message::Ready => Topic::Ready,
            Message::GetItems => Topic::GetItems,
            Message::Items(_) => Topic::Items,
            Message::SaveItem(_) => Topic::SaveItem,
            Message::RemoveCompletedItems => Topic::RemoveCompletedItems,
            Message::SortAscending => Topic::SortAscending,
            Message::SortDescending => Topic::SortDescending,
        }
    }
}

/// Receives the messages of topics subscribed to on a [`Messenger`].
pub trait Subscriber {
    fn receive(&self, message: &Message);
}

/// Single-threaded message bus.
///
/// Subscribers are held weakly: dropping a component unsubscribes it, and a
/// dead registration is skipped (and pruned on the next subscribe to its
/// topic). All delivery happens on the calling thread and completes before
/// `publish` returns.
#[derive(Default)]
pub struct Messenger {
    subscribers: RefCell<HashMap<Topic, Vec<Weak<dyn Subscriber>>>>,
}

impl Messenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to every message published under `topic`.
    pub fn subscribe(&self, topic: Topic, subscriber: &Rc<dyn Subscriber>) {
        let mut subscribers = self.subscribers.borrow_mut();
        let entries = subscribers.entry(topic).or_default();
        entries.retain(|entry| entry.upgrade().is_some());
        entries.push(Rc::downgrade(subscriber));
    }

    /// Deliver `message` to the current subscribers of its topic.
    ///
    /// The subscriber list is snapshotted before delivery and the borrow on
    /// the registry released, so a handler may publish or subscribe without
    /// observing a partially iterated bus.
    pub fn publish(&self, message: Message) {
        let targets: Vec<Weak<dyn Subscriber>> = self
            .subscribers
            .borrow()
            .get(&message.topic())
            .cloned()
            .unwrap_or_default();
        for target in targets {
            if let Some(subscriber) = target.upgrade() {
                subscriber.receive(&message);
            }
        }
    }
}

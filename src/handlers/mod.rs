//! Controller operation handlers
//!
//! One file per topic of the view contract. Each handler applies its
//! mutation to the collection and republishes `items` when it went through.

pub mod get_items;
pub mod remove_completed;
pub mod save_item;
pub mod sort;

use std::cmp::Ordering;

use super::item::Item;

/// Direction of a date sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Ordering strategy over items by date.
///
/// One comparator instance captures a fixed direction. The comparison looks
/// at the date only and never produces a secondary key: items with equal
/// dates compare equal, so a stable sort keeps their collection order.
///
/// Undated items order before any dated item, in both directions - an item
/// with no due date still needs one decided, so it stays at the top of the
/// table. Two undated items compare equal.
#[derive(Debug, Clone, Copy)]
pub struct DateComparator {
    direction: SortDirection,
}

impl DateComparator {
    pub fn new(direction: SortDirection) -> Self {
        Self { direction }
    }

    /// Three-way comparison by date. Total: absent dates never panic.
    pub fn compare(&self, a: &Item, b: &Item) -> Ordering {
        match (a.date(), b.date()) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(x), Some(y)) => match self.direction {
                SortDirection::Ascending => x.cmp(&y),
                SortDirection::Descending => y.cmp(&x),
            },
        }
    }
}

//! Database access layer
//!
//! Read-only queries against the external catalog schema. Every caller
//! value is a bound parameter; the only dynamic SQL is the listing ORDER BY,
//! which is restricted to the [`StoreSort`] enumeration below.

pub mod menus;
pub mod stores;

/// Closed set of permitted store listing sort modes.
///
/// Each variant maps to a pre-validated column + direction pair; free-form
/// sort expressions from the caller are structurally impossible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreSort {
    /// Insertion order, no ORDER BY
    Unsorted,
    /// Minimum delivery time, ascending
    MinDeliveryTime,
    /// Minimum delivery tip, ascending
    MinDeliveryTip,
    /// Rating, descending
    HighestRating,
}

impl StoreSort {
    pub(crate) fn order_clause(self) -> Option<&'static str> {
        match self {
            Self::Unsorted => None,
            Self::MinDeliveryTime => Some("ORDER BY s.min_delivery_time ASC"),
            Self::MinDeliveryTip => Some("ORDER BY s.min_delivery_tip ASC"),
            Self::HighestRating => Some("ORDER BY s.rating DESC"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_modes_map_to_fixed_clauses() {
        assert_eq!(StoreSort::Unsorted.order_clause(), None);
        assert_eq!(
            StoreSort::MinDeliveryTime.order_clause(),
            Some("ORDER BY s.min_delivery_time ASC")
        );
        assert_eq!(
            StoreSort::MinDeliveryTip.order_clause(),
            Some("ORDER BY s.min_delivery_tip ASC")
        );
        assert_eq!(
            StoreSort::HighestRating.order_clause(),
            Some("ORDER BY s.rating DESC")
        );
    }
}

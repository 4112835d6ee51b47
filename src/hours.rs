//! Order-availability window check
//!
//! A store's operating hours are two times-of-day. When the closing time is
//! numerically at or before the opening time, the window crosses midnight
//! (e.g. 18:00-02:00) and the closing instant belongs to the next calendar
//! day. A consequence the product relies on: `start == end` rolls the close
//! forward a full day, yielding a 24-hour window anchored at the opening
//! time rather than a closed-all-day store.

use chrono::{Days, NaiveDateTime, NaiveTime};

/// Decide whether a store is currently accepting orders.
///
/// `now` is the wall-clock time in the reference timezone. Returns `None`
/// when the store is open; otherwise a message naming the next opening.
pub fn order_status(start: NaiveTime, end: NaiveTime, now: NaiveDateTime) -> Option<String> {
    let today = now.date();
    let opens = today.and_time(start);
    let mut closes = today.and_time(end);

    // Midnight-rolled window: closes tomorrow
    if closes <= opens {
        closes = closes + Days::new(1);
    }

    if (opens..=closes).contains(&now) {
        None
    } else if now < opens {
        Some(format!(
            "Not orderable - opens today at {}",
            start.format("%H:%M")
        ))
    } else {
        Some(format!(
            "Not orderable - opens tomorrow at {}",
            start.format("%H:%M")
        ))
    }
}

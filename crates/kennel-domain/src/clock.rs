//! Clock - Where "today" comes from
//!
//! Ordering and stats compare session dates against the start of the
//! current day. The day is supplied from outside so tests can pin it.

use chrono::{DateTime, Utc};

pub trait Clock: Send + Sync {
    /// The current instant
    fn now(&self) -> DateTime<Utc>;

    /// Midnight that began the current day, in the clock's own time zone,
    /// expressed as a UTC instant.
    fn start_of_today(&self) -> DateTime<Utc>;

    /// Midnight that ends the current day. Not always 24 hours after
    /// `start_of_today`: DST days run 23 or 25 hours.
    fn start_of_tomorrow(&self) -> DateTime<Utc>;
}

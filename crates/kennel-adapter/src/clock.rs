//! Clock implementations

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use kennel_domain::clock::Clock;

/// Wall clock. "Today" starts at local midnight.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn start_of_today(&self) -> DateTime<Utc> {
        start_of_day(&Local, Local::now().date_naive())
    }

    fn start_of_tomorrow(&self) -> DateTime<Utc> {
        let today = Local::now().date_naive();
        start_of_day(&Local, today.succ_opt().unwrap_or(today))
    }
}

/// First instant of `date` in `tz`.
///
/// When a DST gap swallows midnight the day starts at the first local time
/// that exists, scanning forward in quarter hours.
fn start_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    (0..96)
        .map(|step| midnight + Duration::minutes(15 * step))
        .find_map(|local| tz.from_local_datetime(&local).earliest())
        .map(|start| start.with_timezone(&Utc))
        // No zone skips a whole day
        .unwrap_or_else(|| Utc.from_utc_datetime(&midnight))
}

/// A clock stopped at one instant. "Today" starts at UTC midnight.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn start_of_today(&self) -> DateTime<Utc> {
        start_of_day(&Utc, self.now.date_naive())
    }

    fn start_of_tomorrow(&self) -> DateTime<Utc> {
        self.start_of_today() + Duration::days(1)
    }
}

//! Schedule - Chronological ordering and status counts for sessions
//!
//! Both derivations hinge on the start of the current day. A session dated
//! strictly after that instant is "upcoming" for ordering purposes, whatever
//! its status says.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::session::{Session, SessionStatus};
use crate::service::roster::SessionView;

/// Anything that sits at a point on the calendar
pub trait Scheduled {
    fn scheduled_at(&self) -> DateTime<Utc>;
}

impl Scheduled for Session {
    fn scheduled_at(&self) -> DateTime<Utc> {
        self.date()
    }
}

impl Scheduled for SessionView {
    fn scheduled_at(&self) -> DateTime<Utc> {
        self.date()
    }
}

fn is_upcoming(date: DateTime<Utc>, day_start: DateTime<Utc>) -> bool {
    date > day_start
}

/// Two-tier comparator: upcoming before past-or-today; upcoming ascending,
/// past descending.
fn compare(a: DateTime<Utc>, b: DateTime<Utc>, day_start: DateTime<Utc>) -> Ordering {
    match (is_upcoming(a, day_start), is_upcoming(b, day_start)) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => a.cmp(&b),
        (false, false) => b.cmp(&a),
    }
}

/// Order sessions soonest-upcoming first, then most-recent past.
///
/// The sort is stable: sessions on the same instant keep their input order.
pub fn order_sessions<T: Scheduled>(mut items: Vec<T>, day_start: DateTime<Utc>) -> Vec<T> {
    items.sort_by(|a, b| compare(a.scheduled_at(), b.scheduled_at(), day_start));
    items
}

/// Counts over the full, unfiltered session collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    /// Status `upcoming` and dated after the start of today
    pub upcoming: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub total: usize,
}

/// Count sessions by status.
///
/// The counters are independent. A session still marked `upcoming` but dated
/// before today counts toward `total` only.
pub fn session_stats(sessions: &[Session], day_start: DateTime<Utc>) -> SessionStats {
    sessions
        .iter()
        .fold(SessionStats::default(), |mut stats, session| {
            match session.status() {
                SessionStatus::Upcoming if is_upcoming(session.date(), day_start) => {
                    stats.upcoming += 1
                }
                SessionStatus::Upcoming => {}
                SessionStatus::Completed => stats.completed += 1,
                SessionStatus::Cancelled => stats.cancelled += 1,
            }
            stats.total += 1;
            stats
        })
}

/// Which calendar bucket a session date falls in, for labelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionTiming {
    Past,
    Today,
    Upcoming,
}

impl SessionTiming {
    /// `day_start..next_day_start` is today on the caller's calendar.
    pub fn of(
        date: DateTime<Utc>,
        day_start: DateTime<Utc>,
        next_day_start: DateTime<Utc>,
    ) -> Self {
        if date < day_start {
            SessionTiming::Past
        } else if date < next_day_start {
            SessionTiming::Today
        } else {
            SessionTiming::Upcoming
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::dog::DogId;
    use crate::model::entity::Entity;
    use crate::model::program::ProgramId;
    use crate::model::session::{NewSession, SessionId};
    use chrono::{Duration, TimeZone};

    fn day_start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap()
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn session(id: u64, date: DateTime<Utc>, status: SessionStatus) -> Session {
        Session::from_draft(
            SessionId::new(id),
            NewSession::scheduled(DogId::new(1), ProgramId::new(1), date).with_status(status),
            Utc::now(),
        )
    }

    fn ids(sessions: &[Session]) -> Vec<u64> {
        sessions.iter().map(|s| s.id().value()).collect()
    }

    #[test]
    fn test_upcoming_then_past() {
        let sessions = vec![
            session(1, at(2099, 1, 1), SessionStatus::Upcoming),
            session(2, at(2020, 1, 1), SessionStatus::Completed),
            session(3, at(2099, 6, 1), SessionStatus::Upcoming),
        ];

        let ordered = order_sessions(sessions, day_start());
        assert_eq!(ids(&ordered), vec![1, 3, 2]);
    }

    #[test]
    fn test_past_is_most_recent_first() {
        let sessions = vec![
            session(1, at(2021, 3, 1), SessionStatus::Completed),
            session(2, at(2025, 3, 1), SessionStatus::Completed),
            session(3, at(2023, 3, 1), SessionStatus::Cancelled),
        ];

        let ordered = order_sessions(sessions, day_start());
        assert_eq!(ids(&ordered), vec![2, 3, 1]);
    }

    #[test]
    fn test_tier_ignores_status() {
        // A completed session dated in the future still orders as upcoming
        let sessions = vec![
            session(1, at(2020, 1, 1), SessionStatus::Upcoming),
            session(2, at(2099, 1, 1), SessionStatus::Completed),
        ];

        let ordered = order_sessions(sessions, day_start());
        assert_eq!(ids(&ordered), vec![2, 1]);
    }

    #[test]
    fn test_start_of_today_is_past() {
        let sessions = vec![
            session(1, day_start(), SessionStatus::Upcoming),
            session(2, day_start() + Duration::hours(9), SessionStatus::Upcoming),
        ];

        let ordered = order_sessions(sessions, day_start());
        assert_eq!(ids(&ordered), vec![2, 1]);
    }

    #[test]
    fn test_equal_dates_keep_input_order() {
        let sessions = vec![
            session(5, at(2099, 1, 1), SessionStatus::Upcoming),
            session(4, at(2099, 1, 1), SessionStatus::Upcoming),
            session(7, at(2020, 1, 1), SessionStatus::Completed),
            session(6, at(2020, 1, 1), SessionStatus::Completed),
        ];

        let ordered = order_sessions(sessions, day_start());
        assert_eq!(ids(&ordered), vec![5, 4, 7, 6]);
    }

    #[test]
    fn test_stats() {
        let sessions = vec![
            session(1, at(2099, 1, 1), SessionStatus::Upcoming),
            session(2, at(2099, 2, 1), SessionStatus::Upcoming),
            session(3, at(2024, 1, 1), SessionStatus::Completed),
            session(4, at(2024, 2, 1), SessionStatus::Completed),
            session(5, at(2024, 3, 1), SessionStatus::Completed),
            session(6, at(2024, 4, 1), SessionStatus::Cancelled),
        ];

        let stats = session_stats(&sessions, day_start());
        assert_eq!(
            stats,
            SessionStats {
                upcoming: 2,
                completed: 3,
                cancelled: 1,
                total: 6,
            }
        );
    }

    #[test]
    fn test_stale_upcoming_only_counts_in_total() {
        let sessions = vec![session(1, at(2024, 1, 1), SessionStatus::Upcoming)];

        let stats = session_stats(&sessions, day_start());
        assert_eq!(stats.upcoming, 0);
        assert_eq!(stats.total, 1);
    }

    #[test]
    fn test_empty_stats() {
        assert_eq!(session_stats(&[], day_start()), SessionStats::default());
    }

    #[test]
    fn test_timing() {
        let start = day_start();
        let end = start + Duration::days(1);
        assert_eq!(
            SessionTiming::of(start - Duration::minutes(1), start, end),
            SessionTiming::Past
        );
        assert_eq!(SessionTiming::of(start, start, end), SessionTiming::Today);
        assert_eq!(
            SessionTiming::of(start + Duration::hours(23), start, end),
            SessionTiming::Today
        );
        assert_eq!(SessionTiming::of(end, start, end), SessionTiming::Upcoming);
    }

    #[test]
    fn test_timing_follows_day_length() {
        // A 25-hour day when clocks go back
        let start = day_start();
        let end = start + Duration::hours(25);
        let late_evening = start + Duration::hours(24) + Duration::minutes(30);
        assert_eq!(SessionTiming::of(late_evening, start, end), SessionTiming::Today);

        // A 23-hour day when clocks go forward
        let end = start + Duration::hours(23);
        let after_midnight = start + Duration::hours(23) + Duration::minutes(30);
        assert_eq!(SessionTiming::of(after_midnight, start, end), SessionTiming::Upcoming);
    }
}

//! Pages - Everything one screen needs, in one call
//!
//! Each page fetches its inputs concurrently, waits for all of them, then
//! hands them to the domain services. Stats are computed from the full
//! collection before any search or status filter is applied.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use kennel_domain::model::dog::{Dog, DogId};
use kennel_domain::model::entity::Entity;
use kennel_domain::model::program::{Program, ProgramId};
use kennel_domain::model::session::{Session, SessionId, SessionStatus};
use kennel_domain::service::roster::{resolve_all, SessionView, StatusFilter};
use kennel_domain::service::schedule::{order_sessions, session_stats, SessionStats, SessionTiming};
use kennel_domain::service::search::search;

use crate::context::KennelContext;
use crate::error::UseCaseResult;

/// A searched list plus the size of the collection it came from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    /// Size of the unfiltered collection
    pub total: usize,
}

impl<T> ListPage<T> {
    /// Nothing stored at all
    pub fn is_empty_collection(&self) -> bool {
        self.total == 0
    }

    /// Records exist but the search hid all of them
    pub fn no_matches(&self) -> bool {
        self.total > 0 && self.items.is_empty()
    }
}

/// One session as a list row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRow {
    pub id: SessionId,
    pub dog_id: DogId,
    pub dog_name: String,
    pub program_id: ProgramId,
    pub program_name: String,
    pub date: DateTime<Utc>,
    pub status: SessionStatus,
    pub timing: SessionTiming,
    /// The dog or program this session points at no longer exists
    pub dangling: bool,
}

impl SessionRow {
    pub fn from_view(
        view: &SessionView,
        day_start: DateTime<Utc>,
        next_day_start: DateTime<Utc>,
    ) -> Self {
        Self {
            id: view.session.id(),
            dog_id: view.session.dog_id(),
            dog_name: view.dog_name().to_string(),
            program_id: view.session.program_id(),
            program_name: view.program_name().to_string(),
            date: view.date(),
            status: view.status(),
            timing: SessionTiming::of(view.date(), day_start, next_day_start),
            dangling: view.has_dangling_reference(),
        }
    }
}

/// The sessions screen: ordered rows and whole-collection counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionsPage {
    pub sessions: Vec<SessionRow>,
    pub stats: SessionStats,
}

impl SessionsPage {
    pub fn is_empty_collection(&self) -> bool {
        self.stats.total == 0
    }

    pub fn no_matches(&self) -> bool {
        self.stats.total > 0 && self.sessions.is_empty()
    }
}

impl KennelContext {
    pub async fn dogs_page(&self, query: &str) -> ListPage<Dog> {
        let dogs = self.dogs().get_all().await;
        let items = search(&dogs, query);
        info!(query, shown = items.len(), total = dogs.len(), "dogs page");
        ListPage {
            items,
            total: dogs.len(),
        }
    }

    pub async fn programs_page(&self, query: &str) -> ListPage<Program> {
        let programs = self.programs().get_all().await;
        let items = search(&programs, query);
        info!(query, shown = items.len(), total = programs.len(), "programs page");
        ListPage {
            items,
            total: programs.len(),
        }
    }

    /// Search, filter and order every session.
    pub async fn sessions_page(&self, query: &str, filter: StatusFilter) -> SessionsPage {
        let (sessions, dogs, programs) = tokio::join!(
            self.sessions().get_all(),
            self.dogs().get_all(),
            self.programs().get_all()
        );

        let day_start = self.clock().start_of_today();
        let stats = session_stats(&sessions, day_start);
        let rows = self.rows(&sessions, &dogs, &programs, query, filter, day_start);

        info!(
            query,
            filter = %filter,
            shown = rows.len(),
            total = stats.total,
            "sessions page"
        );
        SessionsPage {
            sessions: rows,
            stats,
        }
    }

    /// One dog's sessions, ordered like the sessions page.
    ///
    /// # Errors
    ///
    /// `NotFound` when the dog does not exist.
    pub async fn dog_sessions(&self, dog_id: DogId) -> UseCaseResult<(Dog, Vec<SessionRow>)> {
        let (dog, sessions, programs) = tokio::join!(
            self.dogs().get_by_id(dog_id),
            self.sessions().get_by_dog_id(dog_id),
            self.programs().get_all()
        );
        let dog = dog?;

        let day_start = self.clock().start_of_today();
        let rows = self.rows(
            &sessions,
            std::slice::from_ref(&dog),
            &programs,
            "",
            StatusFilter::All,
            day_start,
        );
        Ok((dog, rows))
    }

    /// One program's sessions, ordered like the sessions page.
    ///
    /// # Errors
    ///
    /// `NotFound` when the program does not exist.
    pub async fn program_sessions(
        &self,
        program_id: ProgramId,
    ) -> UseCaseResult<(Program, Vec<SessionRow>)> {
        let (program, sessions, dogs) = tokio::join!(
            self.programs().get_by_id(program_id),
            self.sessions().get_by_program_id(program_id),
            self.dogs().get_all()
        );
        let program = program?;

        let day_start = self.clock().start_of_today();
        let rows = self.rows(
            &sessions,
            &dogs,
            std::slice::from_ref(&program),
            "",
            StatusFilter::All,
            day_start,
        );
        Ok((program, rows))
    }

    fn rows(
        &self,
        sessions: &[Session],
        dogs: &[Dog],
        programs: &[Program],
        query: &str,
        filter: StatusFilter,
        day_start: DateTime<Utc>,
    ) -> Vec<SessionRow> {
        let views = resolve_all(sessions, dogs, programs);

        let dangling = views.iter().filter(|v| v.has_dangling_reference()).count();
        if dangling > 0 {
            warn!(dangling, "sessions reference missing dogs or programs");
        }

        let next_day_start = self.clock().start_of_tomorrow();
        let matched = filter.apply(search(&views, query));
        order_sessions(matched, day_start)
            .iter()
            .map(|view| SessionRow::from_view(view, day_start, next_day_start))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use chrono::TimeZone;
    use kennel_adapter::{FixedClock, SeedData};
    use kennel_domain::model::dog::NewDog;
    use kennel_domain::model::program::NewProgram;
    use kennel_domain::model::session::NewSession;

    fn today() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 10, 0, 0).unwrap()
    }

    fn empty() -> KennelContext {
        KennelContext::in_memory(
            SeedData::default(),
            Duration::ZERO,
            Arc::new(FixedClock::new(today())),
        )
    }

    /// Two dogs, one program, sessions in every status
    async fn populated() -> KennelContext {
        let ctx = empty();
        let rex = ctx.dogs().create(NewDog::new("Rex", "Beagle", 3.0)).await;
        let luna = ctx.dogs().create(NewDog::new("Luna", "Husky", 2.0)).await;
        let basics = ctx
            .programs()
            .create(NewProgram::new("Basics", "Sit", "Foundations"))
            .await;

        let plan = [
            (rex.id(), at(2099, 6, 1), SessionStatus::Upcoming),
            (rex.id(), at(2020, 1, 1), SessionStatus::Completed),
            (luna.id(), at(2099, 1, 1), SessionStatus::Upcoming),
            (luna.id(), at(2021, 1, 1), SessionStatus::Completed),
            (luna.id(), at(2022, 1, 1), SessionStatus::Completed),
            (rex.id(), at(2023, 1, 1), SessionStatus::Cancelled),
        ];
        for (dog, date, status) in plan {
            ctx.sessions()
                .create(NewSession::scheduled(dog, basics.id(), date).with_status(status))
                .await;
        }
        ctx
    }

    fn dates(page: &SessionsPage) -> Vec<DateTime<Utc>> {
        page.sessions.iter().map(|r| r.date).collect()
    }

    #[tokio::test]
    async fn test_sessions_page_order() {
        let ctx = populated().await;
        let page = ctx.sessions_page("", StatusFilter::All).await;

        assert_eq!(
            dates(&page),
            vec![
                at(2099, 1, 1),
                at(2099, 6, 1),
                at(2023, 1, 1),
                at(2022, 1, 1),
                at(2021, 1, 1),
                at(2020, 1, 1),
            ]
        );
    }

    #[tokio::test]
    async fn test_stats_ignore_filters() {
        let ctx = populated().await;
        let expected = SessionStats {
            upcoming: 2,
            completed: 3,
            cancelled: 1,
            total: 6,
        };

        let all = ctx.sessions_page("", StatusFilter::All).await;
        let filtered = ctx
            .sessions_page("luna", StatusFilter::Only(SessionStatus::Cancelled))
            .await;

        assert_eq!(all.stats, expected);
        assert_eq!(filtered.stats, expected);
        assert!(filtered.sessions.is_empty());
        assert!(filtered.no_matches());
    }

    #[tokio::test]
    async fn test_search_and_status_combine() {
        let ctx = populated().await;
        let page = ctx
            .sessions_page("LUN", StatusFilter::Only(SessionStatus::Completed))
            .await;

        assert_eq!(dates(&page), vec![at(2022, 1, 1), at(2021, 1, 1)]);
        assert!(page.sessions.iter().all(|r| r.dog_name == "Luna"));
    }

    #[tokio::test]
    async fn test_deleted_dog_leaves_session_listed() {
        let ctx = populated().await;
        ctx.dogs().delete(DogId::new(1)).await.unwrap();

        let page = ctx.sessions_page("", StatusFilter::All).await;
        assert_eq!(page.stats.total, 6);

        let orphaned: Vec<&SessionRow> = page.sessions.iter().filter(|r| r.dangling).collect();
        assert_eq!(orphaned.len(), 3);
        assert!(orphaned.iter().all(|r| r.dog_name == "Unknown Dog"));
        assert!(orphaned.iter().all(|r| r.program_name == "Basics"));
    }

    #[tokio::test]
    async fn test_timing_labels() {
        let ctx = empty();
        let dog = ctx.dogs().create(NewDog::new("Rex", "Beagle", 3.0)).await;
        let program = ctx.programs().create(NewProgram::new("P", "o", "d")).await;
        for date in [today() + chrono::Duration::hours(2), at(2099, 1, 1), at(2020, 1, 1)] {
            ctx.sessions()
                .create(NewSession::scheduled(dog.id(), program.id(), date))
                .await;
        }

        let page = ctx.sessions_page("", StatusFilter::All).await;
        let timings: Vec<SessionTiming> = page.sessions.iter().map(|r| r.timing).collect();
        assert_eq!(
            timings,
            vec![SessionTiming::Today, SessionTiming::Upcoming, SessionTiming::Past]
        );
    }

    #[tokio::test]
    async fn test_dogs_page_search() {
        let ctx = populated().await;

        let page = ctx.dogs_page("re").await;
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].name(), "Rex");
        assert_eq!(page.total, 2);

        let page = ctx.dogs_page("rexx").await;
        assert!(page.no_matches());
        assert!(!page.is_empty_collection());
    }

    #[tokio::test]
    async fn test_programs_page_searches_description() {
        let ctx = populated().await;
        assert_eq!(ctx.programs_page("foundation").await.items.len(), 1);
        assert_eq!(ctx.programs_page("agility").await.items.len(), 0);
    }

    #[tokio::test]
    async fn test_empty_collection() {
        let ctx = empty();
        assert!(ctx.dogs_page("").await.is_empty_collection());
        assert!(ctx.sessions_page("", StatusFilter::All).await.is_empty_collection());
    }

    #[tokio::test]
    async fn test_dog_sessions() {
        let ctx = populated().await;
        let (dog, rows) = ctx.dog_sessions(DogId::new(2)).await.unwrap();

        assert_eq!(dog.name(), "Luna");
        let listed: Vec<DateTime<Utc>> = rows.iter().map(|r| r.date).collect();
        assert_eq!(listed, vec![at(2099, 1, 1), at(2022, 1, 1), at(2021, 1, 1)]);
    }

    #[tokio::test]
    async fn test_dog_sessions_missing_dog() {
        let ctx = populated().await;
        assert!(ctx.dog_sessions(DogId::new(40)).await.is_err());
    }

    #[tokio::test]
    async fn test_program_sessions() {
        let ctx = populated().await;
        let (program, rows) = ctx.program_sessions(ProgramId::new(1)).await.unwrap();
        assert_eq!(program.name(), "Basics");
        assert_eq!(rows.len(), 6);
    }

    #[tokio::test]
    async fn test_row_serializes_camel_case() {
        let ctx = populated().await;
        let page = ctx.sessions_page("", StatusFilter::All).await;
        let json = serde_json::to_value(&page).unwrap();

        let first = &json["sessions"][0];
        assert_eq!(first["dogName"], "Luna");
        assert_eq!(first["status"], "upcoming");
        assert_eq!(first["timing"], "upcoming");
        assert_eq!(json["stats"]["total"], 6);
    }
}

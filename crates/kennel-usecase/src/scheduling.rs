//! Scheduling - Booking sessions and recording how they went

use chrono::{DateTime, Utc};
use tracing::info;

use kennel_domain::model::dog::DogId;
use kennel_domain::model::entity::Entity;
use kennel_domain::model::program::ProgramId;
use kennel_domain::model::session::{NewSession, Session, SessionId, SessionPatch, SessionStatus};
use kennel_domain::repository::entity_repository::Deleted;

use crate::context::KennelContext;
use crate::error::{FieldError, UseCaseResult, ValidationError};

impl KennelContext {
    /// Book a new `upcoming` session.
    ///
    /// The repository would accept any identifiers; this entry point checks
    /// that the dog and program exist at booking time.
    pub async fn schedule_session(
        &self,
        dog_id: DogId,
        program_id: ProgramId,
        date: DateTime<Utc>,
    ) -> UseCaseResult<Session> {
        let (dog_exists, program_exists) = tokio::join!(
            self.dogs().exists(dog_id),
            self.programs().exists(program_id)
        );

        let mut errors = Vec::new();
        if !dog_exists {
            errors.push(FieldError {
                field: "dogId",
                message: format!("No dog with id {}", dog_id),
            });
        }
        if !program_exists {
            errors.push(FieldError {
                field: "programId",
                message: format!("No program with id {}", program_id),
            });
        }
        if !errors.is_empty() {
            return Err(ValidationError { errors }.into());
        }

        let session = self
            .sessions()
            .create(NewSession::scheduled(dog_id, program_id, date))
            .await;
        info!(id = %session.id(), dog = %dog_id, program = %program_id, "session scheduled");
        Ok(session)
    }

    pub async fn complete_session(&self, id: SessionId) -> UseCaseResult<Session> {
        self.set_session_status(id, SessionStatus::Completed).await
    }

    pub async fn cancel_session(&self, id: SessionId) -> UseCaseResult<Session> {
        self.set_session_status(id, SessionStatus::Cancelled).await
    }

    async fn set_session_status(
        &self,
        id: SessionId,
        status: SessionStatus,
    ) -> UseCaseResult<Session> {
        let session = self
            .sessions()
            .update(id, SessionPatch::new().status(status))
            .await?;
        info!(id = %id, status = %status, "session status changed");
        Ok(session)
    }

    /// Remove a dog. Its sessions stay; they resolve to an unknown dog.
    pub async fn remove_dog(&self, id: DogId) -> UseCaseResult<Deleted> {
        let deleted = self.dogs().delete(id).await?;
        let orphaned = self.sessions().get_by_dog_id(id).await.len();
        info!(id = %id, orphaned, "dog removed");
        Ok(deleted)
    }

    /// Remove a program. Its sessions stay; they resolve to an unknown program.
    pub async fn remove_program(&self, id: ProgramId) -> UseCaseResult<Deleted> {
        let deleted = self.programs().delete(id).await?;
        let orphaned = self.sessions().get_by_program_id(id).await.len();
        info!(id = %id, orphaned, "program removed");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use chrono::TimeZone;
    use kennel_adapter::{FixedClock, SeedData};
    use kennel_domain::model::entity::EntityKind;
    use kennel_domain::repository::entity_repository::RepositoryError;
    use kennel_domain::service::roster::StatusFilter;

    use crate::error::UseCaseError;

    fn ctx() -> KennelContext {
        KennelContext::in_memory(
            SeedData::builtin().unwrap(),
            Duration::ZERO,
            Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap())),
        )
    }

    fn when() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2027, 4, 1, 9, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_schedule_session() {
        let ctx = ctx();
        let session = ctx
            .schedule_session(DogId::new(1), ProgramId::new(2), when())
            .await
            .unwrap();

        assert_eq!(session.id(), SessionId::new(9));
        assert_eq!(session.status(), SessionStatus::Upcoming);
        assert_eq!(session.date(), when());
    }

    #[tokio::test]
    async fn test_schedule_rejects_missing_references() {
        let ctx = ctx();
        let err = ctx
            .schedule_session(DogId::new(99), ProgramId::new(98), when())
            .await
            .unwrap_err();

        match err {
            UseCaseError::Validation(v) => {
                assert!(v.field("dogId").is_some());
                assert!(v.field("programId").is_some());
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(ctx.sessions().count().await, 8);
    }

    #[tokio::test]
    async fn test_complete_and_cancel() {
        let ctx = ctx();

        let done = ctx.complete_session(SessionId::new(5)).await.unwrap();
        assert_eq!(done.status(), SessionStatus::Completed);

        let cancelled = ctx.cancel_session(SessionId::new(6)).await.unwrap();
        assert_eq!(cancelled.status(), SessionStatus::Cancelled);

        let page = ctx.sessions_page("", StatusFilter::All).await;
        assert_eq!(page.stats.upcoming, 2);
    }

    #[tokio::test]
    async fn test_status_change_on_missing_session() {
        let ctx = ctx();
        let err = ctx.complete_session(SessionId::new(404)).await.unwrap_err();
        assert_eq!(
            err,
            UseCaseError::Repository(RepositoryError::not_found(EntityKind::Session, 404))
        );
    }

    #[tokio::test]
    async fn test_remove_dog_keeps_sessions() {
        let ctx = ctx();
        let before = ctx.sessions().count().await;

        let ack = ctx.remove_dog(DogId::new(1)).await.unwrap();
        assert_eq!(ack.kind, EntityKind::Dog);

        assert_eq!(ctx.sessions().count().await, before);
        assert_eq!(ctx.sessions().get_by_dog_id(DogId::new(1)).await.len(), 2);
        assert!(ctx.remove_dog(DogId::new(1)).await.is_err());
    }

    #[tokio::test]
    async fn test_remove_program_marks_sessions_unknown() {
        let ctx = ctx();
        ctx.remove_program(ProgramId::new(2)).await.unwrap();

        let page = ctx.sessions_page("", StatusFilter::All).await;
        let unknown: Vec<_> = page
            .sessions
            .iter()
            .filter(|r| r.program_name == "Unknown Program")
            .collect();
        assert_eq!(unknown.len(), 2);
    }
}

//! Session Repository - CRUD plus foreign-key lookups

use async_trait::async_trait;

use crate::model::dog::DogId;
use crate::model::program::ProgramId;
use crate::model::session::Session;
use crate::repository::entity_repository::Repository;

/// Session Repository Trait
///
/// Lookups by foreign key never fail; no matches is an empty list.
#[async_trait]
pub trait SessionRepository: Repository<Session> {
    /// Sessions for one dog, in insertion order
    async fn get_by_dog_id(&self, dog_id: DogId) -> Vec<Session>;

    /// Sessions for one program, in insertion order
    async fn get_by_program_id(&self, program_id: ProgramId) -> Vec<Session>;
}

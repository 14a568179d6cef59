//! In-Memory Repository Implementations
//!
//! One generic repository serves all three entity kinds. Records live in a
//! vector (insertion order is the listing order) next to the last identifier
//! handed out.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use kennel_domain::model::dog::{Dog, DogId};
use kennel_domain::model::entity::{Entity, RecordId};
use kennel_domain::model::program::{Program, ProgramId};
use kennel_domain::model::session::Session;
use kennel_domain::repository::entity_repository::{
    Deleted, Repository, RepositoryError, RepositoryResult,
};
use kennel_domain::repository::session_repository::SessionRepository;

pub type InMemoryDogRepository = InMemoryRepository<Dog>;
pub type InMemoryProgramRepository = InMemoryRepository<Program>;
pub type InMemorySessionRepository = InMemoryRepository<Session>;

#[derive(Debug)]
struct Collection<E> {
    records: Vec<E>,
    /// Highest identifier ever issued. Never decreases, so deleted
    /// identifiers are not handed out again.
    last_id: u64,
}

/// In-memory repository
///
/// Cloning gives another handle to the same collection. Reads share the
/// lock; `create` takes it exclusively for both identifier allocation and
/// the insert, so two concurrent creates cannot pick the same identifier.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<E: Entity> {
    collection: Arc<RwLock<Collection<E>>>,
    latency: Duration,
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Start from an existing dataset. Identifiers continue after the
    /// largest one present, or from 1 when empty.
    pub fn with_records(records: Vec<E>) -> Self {
        let last_id = records.iter().map(|r| r.id().raw()).max().unwrap_or(0);
        Self {
            collection: Arc::new(RwLock::new(Collection { records, last_id })),
            latency: Duration::ZERO,
        }
    }

    /// Simulated latency applied before every operation
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Every operation suspends at least once before touching the data.
    async fn settle(&self) {
        if self.latency.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(self.latency).await;
        }
    }

    async fn select<F>(&self, keep: F) -> Vec<E>
    where
        F: Fn(&E) -> bool + Send,
    {
        self.settle().await;
        let collection = self.collection.read().await;
        collection
            .records
            .iter()
            .filter(|r| keep(r))
            .cloned()
            .collect()
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn get_all(&self) -> Vec<E> {
        self.select(|_| true).await
    }

    async fn get_by_id(&self, id: E::Id) -> RepositoryResult<E> {
        self.settle().await;
        let collection = self.collection.read().await;
        collection
            .records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(E::KIND, id))
    }

    async fn create(&self, draft: E::Draft) -> E {
        self.settle().await;
        let mut collection = self.collection.write().await;

        collection.last_id += 1;
        let id = E::Id::from_raw(collection.last_id);
        let record = E::from_draft(id, draft, Utc::now());
        collection.records.push(record.clone());

        debug!(kind = %E::KIND, id = %id, "record created");
        record
    }

    async fn update(&self, id: E::Id, patch: E::Patch) -> RepositoryResult<E> {
        self.settle().await;
        let mut collection = self.collection.write().await;

        let slot = collection
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| RepositoryError::not_found(E::KIND, id))?;

        let mut updated = slot.clone();
        updated.apply(patch);
        *slot = updated.clone();

        debug!(kind = %E::KIND, id = %id, "record updated");
        Ok(updated)
    }

    async fn delete(&self, id: E::Id) -> RepositoryResult<Deleted> {
        self.settle().await;
        let mut collection = self.collection.write().await;

        let index = collection
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| RepositoryError::not_found(E::KIND, id))?;
        collection.records.remove(index);

        debug!(kind = %E::KIND, id = %id, "record deleted");
        Ok(Deleted::of::<E>(id))
    }
}

#[async_trait]
impl SessionRepository for InMemoryRepository<Session> {
    async fn get_by_dog_id(&self, dog_id: DogId) -> Vec<Session> {
        self.select(move |s| s.dog_id() == dog_id).await
    }

    async fn get_by_program_id(&self, program_id: ProgramId) -> Vec<Session> {
        self.select(move |s| s.program_id() == program_id).await
    }
}

//! Entity Repository - CRUD over one collection
//!
//! One repository owns one collection and is its only writer. Every value
//! that crosses this boundary, in or out, is a copy.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::entity::{Entity, EntityKind, RecordId};

/// Errors that can occur during repository operations.
///
/// There is exactly one: the identifier matched no live record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },
}

impl RepositoryError {
    /// `id` is kept as text so identifiers that never parsed can still be
    /// reported through the same error.
    pub fn not_found(kind: EntityKind, id: impl ToString) -> Self {
        RepositoryError::NotFound {
            kind,
            id: id.to_string(),
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            RepositoryError::NotFound { kind, .. } => *kind,
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Acknowledgement of a successful delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deleted {
    pub kind: EntityKind,
    pub id: u64,
}

impl Deleted {
    pub fn of<E: Entity>(id: E::Id) -> Self {
        Self {
            kind: E::KIND,
            id: id.raw(),
        }
    }
}

/// Repository Trait
///
/// Every operation completes asynchronously, even when the backing store is
/// a plain vector.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// The whole collection, in insertion order
    async fn get_all(&self) -> Vec<E>;

    /// # Errors
    ///
    /// `NotFound` when no record has this identifier.
    async fn get_by_id(&self, id: E::Id) -> RepositoryResult<E>;

    /// Store a new record under the next identifier and return it.
    ///
    /// No validation happens here; callers check their input first.
    async fn create(&self, draft: E::Draft) -> E;

    /// Merge `patch` over the stored record and return the result.
    ///
    /// # Errors
    ///
    /// `NotFound` when no record has this identifier.
    async fn update(&self, id: E::Id, patch: E::Patch) -> RepositoryResult<E>;

    /// # Errors
    ///
    /// `NotFound` when no record has this identifier.
    async fn delete(&self, id: E::Id) -> RepositoryResult<Deleted>;

    /// Check if a record exists
    async fn exists(&self, id: E::Id) -> bool {
        self.get_by_id(id).await.is_ok()
    }

    /// Count all records
    async fn count(&self) -> usize {
        self.get_all().await.len()
    }
}

//! Entity - What every stored record has in common
//!
//! Repositories are written once, generically, against this trait. Each
//! record type names its identifier, the fields a caller supplies on create
//! (the draft) and the fields a caller may change on update (the patch).

use chrono::{DateTime, Utc};
use core::fmt;
use core::hash::Hash;

/// The three kinds of record the kennel keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Dog,
    Program,
    Session,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Dog => "Dog",
            EntityKind::Program => "Program",
            EntityKind::Session => "Session",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed positive integer identifier.
///
/// Conversions only go through `u64`; there is no string coercion here.
/// Parsing loosely-typed input belongs to whoever received it.
pub trait RecordId:
    Copy + Eq + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    fn from_raw(raw: u64) -> Self;
    fn raw(self) -> u64;
}

/// A record owned by a repository.
pub trait Entity: Clone + fmt::Debug + Send + Sync + 'static {
    const KIND: EntityKind;

    type Id: RecordId;
    /// Fields supplied on create, without identifier or timestamp
    type Draft: Send + 'static;
    /// Fields that may change on update. Never carries an identifier.
    type Patch: Send + 'static;

    fn id(&self) -> Self::Id;

    fn created_at(&self) -> DateTime<Utc>;

    /// Build the stored record from a draft once the repository has picked
    /// an identifier and a creation instant.
    fn from_draft(id: Self::Id, draft: Self::Draft, created_at: DateTime<Utc>) -> Self;

    /// Merge a patch over this record. Supplied fields win; everything else,
    /// identifier and creation instant included, is left alone.
    fn apply(&mut self, patch: Self::Patch);
}

//! # Kennel Domain Layer
//!
//! Dogs, training programs and training sessions, plus the derivations that
//! turn raw collections into view-ready lists.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/      - Entities, identifiers, drafts and patches    ││
//! │  │  repository/ - Async repository ports (not implementations) ││
//! │  │  clock       - "What day is it" port                        ││
//! │  │  service/    - Search, roster join, schedule order & stats  ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Services here never touch a repository. They take the collections a
//! repository returned and derive something new from them.

pub mod clock;
pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use clock::Clock;

pub use model::{
    dog::{Dog, DogId, DogPatch, NewDog},
    entity::{Entity, EntityKind, RecordId},
    program::{NewProgram, Program, ProgramId, ProgramPatch},
    session::{NewSession, Session, SessionId, SessionPatch, SessionStatus},
};

pub use repository::{
    entity_repository::{Deleted, Repository, RepositoryError, RepositoryResult},
    session_repository::SessionRepository,
};

pub use service::{
    roster::{resolve_all, Related, SessionView, StatusFilter, UNKNOWN_DOG, UNKNOWN_PROGRAM},
    schedule::{order_sessions, session_stats, Scheduled, SessionStats, SessionTiming},
    search::{search, Searchable},
};

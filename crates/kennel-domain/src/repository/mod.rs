//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits say what the kennel needs from storage, not how storage
//! does it. The in-memory adapter is one answer.
//!
//! ```text
//! Domain Layer              │  Adapter Layer
//! ──────────────────────────┼─────────────────────────────
//! trait Repository<E>       │  InMemoryRepository<E>
//!   fn get_all()            │
//!   fn create()             │
//! trait SessionRepository   │  InMemorySessionRepository
//!   fn get_by_dog_id()      │
//! ```

pub mod entity_repository;
pub mod session_repository;

//! # Kennel Adapter Layer
//!
//! Implementations of the domain ports.
//!
//! ## Structure
//!
//! - `repository/` - In-memory repository implementations
//! - `seed` - The dataset a fresh process starts from
//! - `clock` - System and fixed clocks

pub mod clock;
pub mod repository;
pub mod seed;

pub use clock::{FixedClock, SystemClock};
pub use repository::in_memory::{
    InMemoryDogRepository, InMemoryProgramRepository, InMemoryRepository,
    InMemorySessionRepository,
};
pub use seed::SeedData;

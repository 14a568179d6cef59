//! KennelContext - Composition root
//!
//! Owns one repository per entity kind and the clock. There is no global
//! instance: whoever owns the application's lifetime builds one and passes
//! it down, and tests build as many isolated ones as they like.
//!
//! ```text
//! KennelContext
//!   ├── dogs:     Arc<dyn Repository<Dog>>
//!   ├── programs: Arc<dyn Repository<Program>>
//!   ├── sessions: Arc<dyn SessionRepository>
//!   └── clock:    Arc<dyn Clock>
//! ```

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use kennel_adapter::{
    InMemoryDogRepository, InMemoryProgramRepository, InMemorySessionRepository, SeedData,
    SystemClock,
};
use kennel_domain::clock::Clock;
use kennel_domain::model::dog::Dog;
use kennel_domain::model::program::Program;
use kennel_domain::repository::entity_repository::Repository;
use kennel_domain::repository::session_repository::SessionRepository;
use shared::KennelConfig;

#[derive(Clone)]
pub struct KennelContext {
    dogs: Arc<dyn Repository<Dog>>,
    programs: Arc<dyn Repository<Program>>,
    sessions: Arc<dyn SessionRepository>,
    clock: Arc<dyn Clock>,
}

impl KennelContext {
    pub fn new(
        dogs: Arc<dyn Repository<Dog>>,
        programs: Arc<dyn Repository<Program>>,
        sessions: Arc<dyn SessionRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            dogs,
            programs,
            sessions,
            clock,
        }
    }

    /// In-memory repositories populated from `seed`
    pub fn in_memory(seed: SeedData, latency: Duration, clock: Arc<dyn Clock>) -> Self {
        info!(
            dogs = seed.dogs.len(),
            programs = seed.programs.len(),
            sessions = seed.sessions.len(),
            latency_ms = latency.as_millis() as u64,
            "building in-memory kennel"
        );

        Self::new(
            Arc::new(InMemoryDogRepository::with_records(seed.dogs).with_latency(latency)),
            Arc::new(InMemoryProgramRepository::with_records(seed.programs).with_latency(latency)),
            Arc::new(InMemorySessionRepository::with_records(seed.sessions).with_latency(latency)),
            clock,
        )
    }

    /// Wire everything from a config file: seed dataset, latency, wall clock.
    pub fn from_config(config: &KennelConfig) -> shared::Result<Self> {
        let seed = SeedData::load(config.seed_path.as_deref())?;
        Ok(Self::in_memory(seed, config.latency(), Arc::new(SystemClock)))
    }

    pub fn dogs(&self) -> &dyn Repository<Dog> {
        self.dogs.as_ref()
    }

    pub fn programs(&self) -> &dyn Repository<Program> {
        self.programs.as_ref()
    }

    pub fn sessions(&self) -> &dyn SessionRepository {
        self.sessions.as_ref()
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}

impl core::fmt::Debug for KennelContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KennelContext").finish_non_exhaustive()
    }
}

//! Seed data - The dataset a fresh process starts from
//!
//! The shape is one JSON document with a list per entity kind. Identifiers
//! in each list must be positive and unique; references between lists are
//! not checked, the same as at runtime.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use kennel_domain::model::dog::Dog;
use kennel_domain::model::entity::{Entity, RecordId};
use kennel_domain::model::program::Program;
use kennel_domain::model::session::Session;
use shared::{KennelError, Result};

const BUILTIN_SEED: &str = include_str!("../seed/default.json");

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub dogs: Vec<Dog>,
    #[serde(default)]
    pub programs: Vec<Program>,
    #[serde(default)]
    pub sessions: Vec<Session>,
}

impl SeedData {
    /// The dataset shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_SEED)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let seed = Self::parse(&content)?;
        info!(
            path = %path.display(),
            dogs = seed.dogs.len(),
            programs = seed.programs.len(),
            sessions = seed.sessions.len(),
            "loaded seed data"
        );
        Ok(seed)
    }

    /// Load from `path` when given, otherwise the built-in dataset.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::builtin(),
        }
    }

    pub fn parse(json: &str) -> Result<Self> {
        let seed: Self = serde_json::from_str(json)?;
        seed.validate()?;
        Ok(seed)
    }

    fn validate(&self) -> Result<()> {
        check_ids(&self.dogs)?;
        check_ids(&self.programs)?;
        check_ids(&self.sessions)
    }
}

fn check_ids<E: Entity>(records: &[E]) -> Result<()> {
    let mut seen = HashSet::new();
    for record in records {
        let id = record.id();
        if id.raw() == 0 {
            return Err(KennelError::Seed(format!("{} id must be positive", E::KIND)));
        }
        if !seen.insert(id) {
            return Err(KennelError::Seed(format!("duplicate {} id: {}", E::KIND, id)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_seed_parses() {
        let seed = SeedData::builtin().unwrap();
        assert_eq!(seed.dogs.len(), 5);
        assert_eq!(seed.programs.len(), 4);
        assert_eq!(seed.sessions.len(), 8);
        assert_eq!(seed.dogs[2].age_text(), "6 months");
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let seed = SeedData::parse(r#"{ "dogs": [] }"#).unwrap();
        assert!(seed.programs.is_empty());
        assert!(seed.sessions.is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let json = r#"{
            "programs": [
                { "id": 1, "name": "A", "objectives": "o", "description": "d", "createdAt": "2025-01-01T00:00:00Z" },
                { "id": 1, "name": "B", "objectives": "o", "description": "d", "createdAt": "2025-01-01T00:00:00Z" }
            ]
        }"#;

        let err = SeedData::parse(json).unwrap_err();
        assert!(matches!(err, KennelError::Seed(msg) if msg.contains("duplicate Program id")));
    }

    #[test]
    fn test_zero_id_rejected() {
        let json = r#"{
            "dogs": [
                { "id": 0, "name": "A", "breed": "B", "age": 1, "createdAt": "2025-01-01T00:00:00Z" }
            ]
        }"#;

        assert!(matches!(SeedData::parse(json), Err(KennelError::Seed(_))));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::write(&path, r#"{ "sessions": [] }"#).unwrap();

        let seed = SeedData::load(Some(&path)).unwrap();
        assert_eq!(seed, SeedData::default());
    }
}

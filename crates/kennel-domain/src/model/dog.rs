//! Dog - A canine client
//!
//! A Dog is an Entity: renaming it or correcting its breed does not make it
//! a different dog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKind, RecordId};

/// Unique identifier for a Dog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DogId(u64);

impl DogId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl RecordId for DogId {
    fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    fn raw(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for DogId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dog - one client profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dog {
    id: DogId,
    name: String,
    breed: String,
    /// Age in years; fractions express months for puppies
    age: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    temperament: Option<String>,
    created_at: DateTime<Utc>,
}

impl Dog {
    // ========== Getters ==========

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn breed(&self) -> &str {
        &self.breed
    }

    pub fn age(&self) -> f64 {
        self.age
    }

    pub fn temperament(&self) -> Option<&str> {
        self.temperament.as_deref()
    }

    /// Human-readable age: months below one year, years from there on.
    pub fn age_text(&self) -> String {
        if self.age < 1.0 {
            let months = (self.age * 12.0 * 10.0).round() / 10.0;
            format!("{} months", months)
        } else if self.age > 1.0 {
            format!("{} years old", self.age)
        } else {
            "1 year old".to_string()
        }
    }
}

impl Entity for Dog {
    const KIND: EntityKind = EntityKind::Dog;

    type Id = DogId;
    type Draft = NewDog;
    type Patch = DogPatch;

    fn id(&self) -> DogId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: DogId, draft: NewDog, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            breed: draft.breed,
            age: draft.age,
            temperament: draft.temperament,
            created_at,
        }
    }

    fn apply(&mut self, patch: DogPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(breed) = patch.breed {
            self.breed = breed;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(temperament) = patch.temperament {
            self.temperament = temperament;
        }
    }
}

/// Fields for a dog that does not exist yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDog {
    pub name: String,
    pub breed: String,
    pub age: f64,
    #[serde(default)]
    pub temperament: Option<String>,
}

impl NewDog {
    pub fn new(name: impl Into<String>, breed: impl Into<String>, age: f64) -> Self {
        Self {
            name: name.into(),
            breed: breed.into(),
            age,
            temperament: None,
        }
    }

    pub fn with_temperament(mut self, temperament: impl Into<String>) -> Self {
        self.temperament = Some(temperament.into());
        self
    }
}

/// Partial update for a Dog.
///
/// `temperament: Some(None)` clears the field; `None` leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DogPatch {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub age: Option<f64>,
    pub temperament: Option<Option<String>>,
}

impl DogPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = Some(breed.into());
        self
    }

    pub fn age(mut self, age: f64) -> Self {
        self.age = Some(age);
        self
    }

    pub fn temperament(mut self, temperament: Option<String>) -> Self {
        self.temperament = Some(temperament);
        self
    }
}

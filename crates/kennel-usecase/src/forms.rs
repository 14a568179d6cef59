//! Forms - Checking collaborator input before it becomes a draft
//!
//! Repositories accept whatever they are given. Required-field and range
//! checks happen here, on the raw text a user typed, and every failing
//! field is reported at once.

use tracing::debug;

use kennel_domain::model::dog::NewDog;
use kennel_domain::model::entity::{Entity, RecordId};
use kennel_domain::model::program::NewProgram;
use kennel_domain::repository::entity_repository::RepositoryError;

use crate::context::KennelContext;
use crate::error::{FieldError, UseCaseResult, ValidationError};

/// Raw input for a new dog profile
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DogForm {
    pub name: String,
    pub breed: String,
    /// Age in years as typed, e.g. "2" or "0.5"
    pub age: String,
    pub temperament: String,
}

impl DogForm {
    pub fn validate(&self) -> Result<NewDog, ValidationError> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(required("name", "Dog name is required"));
        }

        let breed = self.breed.trim();
        if breed.is_empty() {
            errors.push(required("breed", "Breed is required"));
        }

        let age = match self.age.trim().parse::<f64>() {
            Ok(age) if age.is_finite() && age > 0.0 => Some(age),
            _ => {
                errors.push(required("age", "Valid age is required"));
                None
            }
        };

        match age {
            Some(age) if errors.is_empty() => {
                let dog = NewDog::new(name, breed, age);
                let temperament = self.temperament.trim();
                Ok(if temperament.is_empty() {
                    dog
                } else {
                    dog.with_temperament(temperament)
                })
            }
            _ => Err(ValidationError { errors }),
        }
    }
}

/// Raw input for a new training program
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramForm {
    pub name: String,
    pub objectives: String,
    pub description: String,
}

impl ProgramForm {
    pub fn validate(&self) -> Result<NewProgram, ValidationError> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(required("name", "Program name is required"));
        }
        let objectives = self.objectives.trim();
        if objectives.is_empty() {
            errors.push(required("objectives", "Objectives are required"));
        }
        let description = self.description.trim();
        if description.is_empty() {
            errors.push(required("description", "Description is required"));
        }

        if errors.is_empty() {
            Ok(NewProgram::new(name, objectives, description))
        } else {
            Err(ValidationError { errors })
        }
    }
}

fn required(field: &'static str, message: &str) -> FieldError {
    FieldError {
        field,
        message: message.to_string(),
    }
}

/// Turn loosely-typed identifier text into a typed identifier.
///
/// Text that is not a positive integer cannot name any record, so it is
/// reported as `NotFound` carrying the text as given.
pub fn parse_id<E: Entity>(raw: &str) -> Result<E::Id, RepositoryError> {
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => Ok(E::Id::from_raw(value)),
        _ => Err(RepositoryError::not_found(E::KIND, raw.trim())),
    }
}

impl KennelContext {
    /// Validate and store a new dog.
    pub async fn add_dog(&self, form: &DogForm) -> UseCaseResult<kennel_domain::Dog> {
        let draft = form.validate()?;
        let dog = self.dogs().create(draft).await;
        debug!(id = %dog.id(), name = dog.name(), "dog added");
        Ok(dog)
    }

    /// Validate and store a new program.
    pub async fn add_program(&self, form: &ProgramForm) -> UseCaseResult<kennel_domain::Program> {
        let draft = form.validate()?;
        let program = self.programs().create(draft).await;
        debug!(id = %program.id(), name = program.name(), "program added");
        Ok(program)
    }
}

//! # Kennel Use Case Layer
//!
//! Application-specific flows. This layer wires repositories together,
//! fetches what a page needs and runs it through the domain services.
//!
//! - `context` - Composition root owning the repositories and the clock
//! - `pages` - Dogs, programs and sessions pages, ready to render
//! - `forms` - Validation of collaborator input before it reaches a repository
//! - `scheduling` - Scheduling sessions and recording their outcome

pub mod context;
pub mod error;
pub mod forms;
pub mod pages;
pub mod scheduling;

pub use kennel_domain;

pub use context::KennelContext;
pub use error::{FieldError, UseCaseError, UseCaseResult, ValidationError};
pub use forms::{parse_id, DogForm, ProgramForm};
pub use pages::{ListPage, SessionRow, SessionsPage};

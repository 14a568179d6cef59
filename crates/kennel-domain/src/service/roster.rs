//! Roster - Sessions joined to the dogs and programs they reference
//!
//! A session outlives the records it points at. When a reference no longer
//! resolves, the view carries an explicit `Unknown` instead of failing, so
//! the session itself can still be shown.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use crate::model::dog::{Dog, DogId};
use crate::model::entity::Entity;
use crate::model::program::{Program, ProgramId};
use crate::model::session::{Session, SessionStatus};
use crate::service::search::Searchable;

pub const UNKNOWN_DOG: &str = "Unknown Dog";
pub const UNKNOWN_PROGRAM: &str = "Unknown Program";

/// The outcome of following a foreign key
#[derive(Debug, Clone, PartialEq)]
pub enum Related<E: Entity> {
    Known(E),
    /// The identifier that failed to resolve
    Unknown(E::Id),
}

impl<E: Entity> Related<E> {
    pub fn known(&self) -> Option<&E> {
        match self {
            Related::Known(entity) => Some(entity),
            Related::Unknown(_) => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Related::Unknown(_))
    }

    fn lookup(id: E::Id, index: &HashMap<E::Id, &E>) -> Self {
        match index.get(&id) {
            Some(entity) => Related::Known((*entity).clone()),
            None => Related::Unknown(id),
        }
    }
}

/// A session with its dog and program resolved
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    pub session: Session,
    pub dog: Related<Dog>,
    pub program: Related<Program>,
}

impl SessionView {
    /// Resolve one session against full dog and program collections.
    pub fn resolve(session: &Session, dogs: &[Dog], programs: &[Program]) -> Self {
        let dog_index = index(dogs);
        let program_index = index(programs);
        Self::resolve_indexed(session, &dog_index, &program_index)
    }

    fn resolve_indexed(
        session: &Session,
        dogs: &HashMap<DogId, &Dog>,
        programs: &HashMap<ProgramId, &Program>,
    ) -> Self {
        Self {
            session: session.clone(),
            dog: Related::lookup(session.dog_id(), dogs),
            program: Related::lookup(session.program_id(), programs),
        }
    }

    pub fn dog_name(&self) -> &str {
        self.dog.known().map(|d| d.name()).unwrap_or(UNKNOWN_DOG)
    }

    pub fn program_name(&self) -> &str {
        self.program.known().map(|p| p.name()).unwrap_or(UNKNOWN_PROGRAM)
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.session.date()
    }

    pub fn status(&self) -> SessionStatus {
        self.session.status()
    }

    /// True when either reference points at a record that no longer exists
    pub fn has_dangling_reference(&self) -> bool {
        self.dog.is_unknown() || self.program.is_unknown()
    }
}

impl Searchable for SessionView {
    /// Only resolved names are searched. The placeholder text is not
    /// something a user typed and should not match their query.
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = Vec::with_capacity(2);
        if let Some(dog) = self.dog.known() {
            fields.push(dog.name());
        }
        if let Some(program) = self.program.known() {
            fields.push(program.name());
        }
        fields
    }
}

/// Resolve every session, keeping the input order.
pub fn resolve_all(sessions: &[Session], dogs: &[Dog], programs: &[Program]) -> Vec<SessionView> {
    let dog_index = index(dogs);
    let program_index = index(programs);
    sessions
        .iter()
        .map(|s| SessionView::resolve_indexed(s, &dog_index, &program_index))
        .collect()
}

fn index<E: Entity>(items: &[E]) -> HashMap<E::Id, &E> {
    items.iter().map(|item| (item.id(), item)).collect()
}

/// Status filter for the session list. `All` lets everything through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(SessionStatus),
}

impl StatusFilter {
    pub fn accepts(&self, status: SessionStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }

    pub fn apply(&self, views: Vec<SessionView>) -> Vec<SessionView> {
        views
            .into_iter()
            .filter(|v| self.accepts(v.status()))
            .collect()
    }
}

impl core::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(StatusFilter::All);
        }
        s.parse::<SessionStatus>().map(StatusFilter::Only)
    }
}

impl core::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

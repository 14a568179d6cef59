//! Session - One scheduled meeting of a dog and a program
//!
//! A session points at a dog and a program by identifier only. Nothing stops
//! those records from being deleted later; readers resolve the references
//! and cope with the gaps (see `service::roster`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::dog::DogId;
use super::entity::{Entity, EntityKind, RecordId};
use super::program::ProgramId;

/// Unique identifier for a Session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(u64);

impl SessionId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl RecordId for SessionId {
    fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    fn raw(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for SessionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a session is in its life.
///
/// Sessions start `Upcoming`. `Completed` and `Cancelled` are written from
/// outside through an update; nothing here moves a session out of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Upcoming,
    Completed,
    Cancelled,
}

impl SessionStatus {
    pub const ALL: [SessionStatus; 3] = [
        SessionStatus::Upcoming,
        SessionStatus::Completed,
        SessionStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Upcoming => "upcoming",
            SessionStatus::Completed => "completed",
            SessionStatus::Cancelled => "cancelled",
        }
    }

    /// Capitalized form for badges and headings
    pub fn label(&self) -> &'static str {
        match self {
            SessionStatus::Upcoming => "Upcoming",
            SessionStatus::Completed => "Completed",
            SessionStatus::Cancelled => "Cancelled",
        }
    }
}

impl core::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upcoming" => Ok(SessionStatus::Upcoming),
            "completed" => Ok(SessionStatus::Completed),
            "cancelled" => Ok(SessionStatus::Cancelled),
            other => Err(format!("unknown session status: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    id: SessionId,
    dog_id: DogId,
    program_id: ProgramId,
    /// When the session is scheduled to happen
    date: DateTime<Utc>,
    status: SessionStatus,
    created_at: DateTime<Utc>,
}

impl Session {
    pub fn dog_id(&self) -> DogId {
        self.dog_id
    }

    pub fn program_id(&self) -> ProgramId {
        self.program_id
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }
}

impl Entity for Session {
    const KIND: EntityKind = EntityKind::Session;

    type Id = SessionId;
    type Draft = NewSession;
    type Patch = SessionPatch;

    fn id(&self) -> SessionId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: SessionId, draft: NewSession, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            dog_id: draft.dog_id,
            program_id: draft.program_id,
            date: draft.date,
            status: draft.status,
            created_at,
        }
    }

    fn apply(&mut self, patch: SessionPatch) {
        if let Some(dog_id) = patch.dog_id {
            self.dog_id = dog_id;
        }
        if let Some(program_id) = patch.program_id {
            self.program_id = program_id;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSession {
    pub dog_id: DogId,
    pub program_id: ProgramId,
    pub date: DateTime<Utc>,
    pub status: SessionStatus,
}

impl NewSession {
    /// A freshly scheduled session, status `upcoming`
    pub fn scheduled(dog_id: DogId, program_id: ProgramId, date: DateTime<Utc>) -> Self {
        Self {
            dog_id,
            program_id,
            date,
            status: SessionStatus::Upcoming,
        }
    }

    pub fn with_status(mut self, status: SessionStatus) -> Self {
        self.status = status;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionPatch {
    pub dog_id: Option<DogId>,
    pub program_id: Option<ProgramId>,
    pub date: Option<DateTime<Utc>>,
    pub status: Option<SessionStatus>,
}

impl SessionPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: SessionStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn dog_id(mut self, dog_id: DogId) -> Self {
        self.dog_id = Some(dog_id);
        self
    }

    pub fn program_id(mut self, program_id: ProgramId) -> Self {
        self.program_id = Some(program_id);
        self
    }
}

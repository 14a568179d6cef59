//! Program - A training curriculum dogs can be enrolled in

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityKind, RecordId};

/// Unique identifier for a Program
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgramId(u64);

impl ProgramId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl RecordId for ProgramId {
    fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    fn raw(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for ProgramId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    id: ProgramId,
    name: String,
    objectives: String,
    description: String,
    created_at: DateTime<Utc>,
}

impl Program {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn objectives(&self) -> &str {
        &self.objectives
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Entity for Program {
    const KIND: EntityKind = EntityKind::Program;

    type Id = ProgramId;
    type Draft = NewProgram;
    type Patch = ProgramPatch;

    fn id(&self) -> ProgramId {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: ProgramId, draft: NewProgram, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            objectives: draft.objectives,
            description: draft.description,
            created_at,
        }
    }

    fn apply(&mut self, patch: ProgramPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(objectives) = patch.objectives {
            self.objectives = objectives;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProgram {
    pub name: String,
    pub objectives: String,
    pub description: String,
}

impl NewProgram {
    pub fn new(
        name: impl Into<String>,
        objectives: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            objectives: objectives.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramPatch {
    pub name: Option<String>,
    pub objectives: Option<String>,
    pub description: Option<String>,
}

impl ProgramPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn objectives(mut self, objectives: impl Into<String>) -> Self {
        self.objectives = Some(objectives.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_merge() {
        let mut program = Program::from_draft(
            ProgramId::new(3),
            NewProgram::new("Puppy Basics", "Sit, stay", "Six weeks of foundations"),
            Utc::now(),
        );

        program.apply(ProgramPatch::new().objectives("Sit, stay, come"));

        assert_eq!(program.id(), ProgramId::new(3));
        assert_eq!(program.name(), "Puppy Basics");
        assert_eq!(program.objectives(), "Sit, stay, come");
        assert_eq!(program.description(), "Six weeks of foundations");
    }
}

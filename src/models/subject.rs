//! Subject records
//!
//! A subject is one curriculum item. Its identity and prerequisite link are
//! fixed once the catalog is loaded; only the approval flag changes at runtime.

use serde::{Deserialize, Serialize};

/// Subject definition as written in the catalog file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubjectDef {
    /// Unique subject identifier (e.g., "MATH101")
    pub id: String,

    /// Human-readable name
    #[serde(default)]
    pub name: Option<String>,

    /// Semester the subject belongs to (used for grouping only)
    #[serde(default)]
    pub semester: Option<u32>,

    /// Id of the subject that must be approved first
    #[serde(default)]
    pub prerequisite: Option<String>,

    /// Display name of the prerequisite for user-facing notices
    #[serde(default)]
    pub prerequisite_name: Option<String>,
}

impl SubjectDef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            semester: None,
            prerequisite: None,
            prerequisite_name: None,
        }
    }

    /// Set the semester
    pub fn in_semester(mut self, semester: u32) -> Self {
        self.semester = Some(semester);
        self
    }

    /// Set the prerequisite and its display name
    pub fn requires(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.prerequisite = Some(id.into());
        self.prerequisite_name = Some(name.into());
        self
    }
}

/// A subject as tracked at runtime
#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    id: String,
    name: String,
    semester: Option<u32>,
    prerequisite_id: Option<String>,
    prerequisite_name: Option<String>,
    approved: bool,
}

impl Subject {
    /// Build a subject in the unapproved state
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        semester: Option<u32>,
        prerequisite_id: Option<String>,
        prerequisite_name: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            semester,
            prerequisite_id,
            prerequisite_name,
            approved: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn semester(&self) -> Option<u32> {
        self.semester
    }

    pub fn prerequisite_id(&self) -> Option<&str> {
        self.prerequisite_id.as_deref()
    }

    /// Name shown when the prerequisite is missing, falling back to its id
    pub fn prerequisite_name(&self) -> Option<&str> {
        self.prerequisite_name
            .as_deref()
            .or(self.prerequisite_id.as_deref())
    }

    pub fn is_approved(&self) -> bool {
        self.approved
    }

    pub(crate) fn set_approved(&mut self, approved: bool) {
        self.approved = approved;
    }
}

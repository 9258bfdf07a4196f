//! Curriculum State Controller
//!
//! Owns the subjects of a curriculum and keeps their approval flags in step
//! with the state store:
//! - startup loads the stored approval set onto the subjects
//! - a click toggles one subject, gated by its prerequisite
//! - every successful toggle writes a full snapshot back to the store

mod notifier;

pub use notifier::{prerequisite_notice, ConsoleNotifier, Notifier, RecordingNotifier};

use crate::models::{Catalog, Subject};
use crate::state::{StateStore, StoreError};
use std::collections::HashMap;

/// Result type for controller operations
pub type ControllerResult<T> = Result<T, ControllerError>;

/// Errors raised by the controller
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error("Unknown subject: {0}")]
    UnknownSubject(String),

    #[error("Duplicate subject id: {0}")]
    DuplicateSubject(String),

    #[error("Subject '{subject}' requires unknown subject '{prerequisite}'")]
    DanglingPrerequisite {
        subject: String,
        prerequisite: String,
    },

    #[error("Failed to save approval state: {0}")]
    Store(#[from] StoreError),
}

/// What a click did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Subject moved to Approved and state was saved
    Approved,
    /// Subject moved to Unapproved and state was saved
    Unapproved,
    /// Prerequisite not approved yet; nothing changed
    Rejected {
        prerequisite_id: String,
        prerequisite_name: String,
    },
}

impl ClickOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, ClickOutcome::Rejected { .. })
    }
}

/// Approved/total counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub approved: usize,
    pub total: usize,
}

impl Progress {
    /// Whole-number percentage, 0 for an empty curriculum
    pub fn percent(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.approved * 100 / self.total
        }
    }
}

pub struct CurriculumController<S, N> {
    subjects: Vec<Subject>,
    index: HashMap<String, usize>,
    store: S,
    notifier: N,
}

impl<S: StateStore, N: Notifier> CurriculumController<S, N> {
    /// Take ownership of the subjects and load the stored approval state
    ///
    /// Ids must be unique and every prerequisite must name one of the given
    /// subjects; a dangling reference is a configuration error.
    pub fn new(subjects: Vec<Subject>, store: S, notifier: N) -> ControllerResult<Self> {
        let mut index = HashMap::with_capacity(subjects.len());
        for (position, subject) in subjects.iter().enumerate() {
            if index.insert(subject.id().to_string(), position).is_some() {
                return Err(ControllerError::DuplicateSubject(subject.id().to_string()));
            }
        }

        for subject in &subjects {
            if let Some(prerequisite) = subject.prerequisite_id() {
                if !index.contains_key(prerequisite) {
                    return Err(ControllerError::DanglingPrerequisite {
                        subject: subject.id().to_string(),
                        prerequisite: prerequisite.to_string(),
                    });
                }
            }
        }

        let mut controller = Self {
            subjects,
            index,
            store,
            notifier,
        };
        controller.load_state();
        Ok(controller)
    }

    /// Build from a validated catalog
    pub fn from_catalog(catalog: &Catalog, store: S, notifier: N) -> ControllerResult<Self> {
        Self::new(catalog.subjects(), store, notifier)
    }

    /// Mark every stored id as approved
    ///
    /// Subjects missing from the stored list are left as they are, and stored
    /// ids that match no subject are ignored.
    pub fn load_state(&mut self) {
        for id in self.store.load() {
            if let Some(&position) = self.index.get(&id) {
                self.subjects[position].set_approved(true);
            }
        }
    }

    /// Write the ids of all approved subjects, replacing what was stored
    pub fn save_state(&mut self) -> ControllerResult<()> {
        let approved = self.approved_ids();
        self.store.save(&approved)?;
        Ok(())
    }

    /// Toggle the subject with `id`
    ///
    /// Approving requires the prerequisite (if any) to be approved; otherwise
    /// the notifier is told and nothing changes. Successful toggles are saved
    /// once. If the save fails the toggle is undone.
    pub fn handle_click(&mut self, id: &str) -> ControllerResult<ClickOutcome> {
        let position = *self
            .index
            .get(id)
            .ok_or_else(|| ControllerError::UnknownSubject(id.to_string()))?;

        let outcome = if self.subjects[position].is_approved() {
            self.subjects[position].set_approved(false);
            ClickOutcome::Unapproved
        } else {
            if let Some(rejection) = self.check_prerequisite(position) {
                if let ClickOutcome::Rejected {
                    prerequisite_name, ..
                } = &rejection
                {
                    self.notifier.notify(&prerequisite_notice(prerequisite_name));
                }
                return Ok(rejection);
            }
            self.subjects[position].set_approved(true);
            ClickOutcome::Approved
        };

        if let Err(e) = self.save_state() {
            let subject = &mut self.subjects[position];
            subject.set_approved(!subject.is_approved());
            return Err(e);
        }

        Ok(outcome)
    }

    /// `Some(Rejected)` when the subject at `position` has an unapproved prerequisite
    fn check_prerequisite(&self, position: usize) -> Option<ClickOutcome> {
        let subject = &self.subjects[position];
        let prerequisite_id = subject.prerequisite_id()?;

        // Prerequisites were checked against the index at construction
        let prerequisite = self
            .index
            .get(prerequisite_id)
            .map(|&p| &self.subjects[p])?;

        if prerequisite.is_approved() {
            return None;
        }

        Some(ClickOutcome::Rejected {
            prerequisite_id: prerequisite_id.to_string(),
            prerequisite_name: subject
                .prerequisite_name()
                .unwrap_or(prerequisite_id)
                .to_string(),
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Subjects in catalog order
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.index.get(id).map(|&position| &self.subjects[position])
    }

    pub fn is_approved(&self, id: &str) -> bool {
        self.subject(id).is_some_and(Subject::is_approved)
    }

    /// Ids of approved subjects in catalog order
    pub fn approved_ids(&self) -> Vec<String> {
        self.subjects
            .iter()
            .filter(|s| s.is_approved())
            .map(|s| s.id().to_string())
            .collect()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            approved: self.subjects.iter().filter(|s| s.is_approved()).count(),
            total: self.subjects.len(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

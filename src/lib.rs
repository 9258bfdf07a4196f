// Pensum - Curriculum approval tracker
// Marks subjects approved, enforces prerequisites and keeps state between runs

pub mod cli;
pub mod controller;
pub mod models;
pub mod state;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use controller::{ClickOutcome, ControllerError, CurriculumController, Notifier};
pub use models::{Catalog, Subject, SubjectDef, TrackerConfig};
pub use state::{ApprovalStore, FileStorage, KeyValueStore, MemoryStorage, StateStore};

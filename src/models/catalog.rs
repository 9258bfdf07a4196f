//! Curriculum catalog
//!
//! The catalog is the static structure a tracker works against: the list of
//! subjects and their prerequisite links. It is read from a YAML file and
//! validated before any subject is handed to the controller.

use super::subject::{Subject, SubjectDef};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Sample catalog written by `pensum init`
pub const SAMPLE_CATALOG: &str = r#"# Subjects of the curriculum. Each subject may name one prerequisite.
name: Computer Engineering
subjects:
  - id: MATH101
    name: Calculus I
    semester: 1
  - id: PROG101
    name: Introduction to Programming
    semester: 1
  - id: MATH201
    name: Calculus II
    semester: 2
    prerequisite: MATH101
    prerequisite_name: Calculus I
  - id: PROG201
    name: Data Structures
    semester: 2
    prerequisite: PROG101
    prerequisite_name: Introduction to Programming
  - id: PROG301
    name: Algorithms
    semester: 3
    prerequisite: PROG201
    prerequisite_name: Data Structures
"#;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while reading or validating a catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Subject at position {0} has an empty id")]
    EmptyId(usize),

    #[error("Duplicate subject id: {0}")]
    DuplicateId(String),

    #[error("Subject '{0}' lists itself as its prerequisite")]
    SelfPrerequisite(String),

    #[error("Subject '{subject}' requires unknown subject '{prerequisite}'")]
    DanglingPrerequisite {
        subject: String,
        prerequisite: String,
    },
}

/// Catalog file contents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Curriculum name
    #[serde(default)]
    pub name: Option<String>,

    /// Subjects in display order
    #[serde(default)]
    pub subjects: Vec<SubjectDef>,
}

impl Catalog {
    /// Build a catalog from subject definitions and validate it
    pub fn new(name: Option<String>, subjects: Vec<SubjectDef>) -> CatalogResult<Self> {
        let catalog = Self { name, subjects }.normalized();
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load and validate a catalog file
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse and validate catalog YAML
    pub fn from_yaml(content: &str) -> CatalogResult<Self> {
        let catalog = serde_yaml::from_str::<Catalog>(content)?.normalized();
        catalog.validate()?;
        Ok(catalog)
    }

    /// A blank prerequisite means the subject has none
    fn normalized(mut self) -> Self {
        for def in &mut self.subjects {
            if def.prerequisite.as_deref().is_some_and(|p| p.trim().is_empty()) {
                def.prerequisite = None;
                def.prerequisite_name = None;
            }
        }
        self
    }

    /// Check ids are unique and every prerequisite points at a known subject
    pub fn validate(&self) -> CatalogResult<()> {
        let mut seen = HashMap::new();
        for (index, def) in self.subjects.iter().enumerate() {
            if def.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(index));
            }
            if seen.insert(def.id.as_str(), index).is_some() {
                return Err(CatalogError::DuplicateId(def.id.clone()));
            }
        }

        for def in &self.subjects {
            let Some(prerequisite) = def.prerequisite.as_deref() else {
                continue;
            };
            if prerequisite == def.id {
                return Err(CatalogError::SelfPrerequisite(def.id.clone()));
            }
            if !seen.contains_key(prerequisite) {
                return Err(CatalogError::DanglingPrerequisite {
                    subject: def.id.clone(),
                    prerequisite: prerequisite.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Turn definitions into runtime subjects, all unapproved
    ///
    /// A missing display name falls back to the id, and a missing prerequisite
    /// display name falls back to the prerequisite's own name.
    pub fn subjects(&self) -> Vec<Subject> {
        let names: HashMap<&str, &str> = self
            .subjects
            .iter()
            .map(|def| (def.id.as_str(), def.name.as_deref().unwrap_or(&def.id)))
            .collect();

        self.subjects
            .iter()
            .map(|def| {
                let prerequisite_name = def.prerequisite_name.clone().or_else(|| {
                    def.prerequisite
                        .as_deref()
                        .and_then(|id| names.get(id))
                        .map(|name| name.to_string())
                });

                Subject::new(
                    def.id.clone(),
                    def.name.clone().unwrap_or_else(|| def.id.clone()),
                    def.semester,
                    def.prerequisite.clone(),
                    prerequisite_name,
                )
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sample_catalog_is_valid() {
        let catalog = Catalog::from_yaml(SAMPLE_CATALOG).unwrap();
        assert_eq!(catalog.name.as_deref(), Some("Computer Engineering"));
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("curriculum.yaml");
        fs::write(&path, SAMPLE_CATALOG).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.subjects[2].prerequisite.as_deref(), Some("MATH101"));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let result = Catalog::load(&temp.path().join("missing.yaml"));
        assert!(matches!(result, Err(CatalogError::ReadError(_))));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = Catalog::new(
            None,
            vec![
                SubjectDef::new("MATH101", "Calculus I"),
                SubjectDef::new("MATH101", "Calculus I again"),
            ],
        );
        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "MATH101"));
    }

    #[test]
    fn test_rejects_empty_id() {
        let result = Catalog::new(None, vec![SubjectDef::new("  ", "Nameless")]);
        assert!(matches!(result, Err(CatalogError::EmptyId(0))));
    }

    #[test]
    fn test_rejects_dangling_prerequisite() {
        let result = Catalog::new(
            None,
            vec![SubjectDef::new("MATH201", "Calculus II").requires("MATH101", "Calculus I")],
        );

        match result {
            Err(CatalogError::DanglingPrerequisite {
                subject,
                prerequisite,
            }) => {
                assert_eq!(subject, "MATH201");
                assert_eq!(prerequisite, "MATH101");
            }
            other => panic!("expected dangling prerequisite, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_prerequisite_means_none() {
        let yaml = r#"
subjects:
  - id: MATH101
    name: Calculus I
    prerequisite: ""
  - id: PROG101
    prerequisite: "  "
    prerequisite_name: Nothing
"#;
        let catalog = Catalog::from_yaml(yaml).unwrap();
        assert!(catalog.subjects.iter().all(|def| def.prerequisite.is_none()));

        let subjects = catalog.subjects();
        assert_eq!(subjects[0].prerequisite_id(), None);
        assert_eq!(subjects[1].prerequisite_name(), None);

        let built = Catalog::new(
            None,
            vec![SubjectDef::new("MATH201", "Calculus II").requires("", "")],
        )
        .unwrap();
        assert_eq!(built.subjects[0].prerequisite, None);
    }

    #[test]
    fn test_rejects_self_prerequisite() {
        let result = Catalog::new(
            None,
            vec![SubjectDef::new("MATH101", "Calculus I").requires("MATH101", "Calculus I")],
        );
        assert!(matches!(result, Err(CatalogError::SelfPrerequisite(_))));
    }

    #[test]
    fn test_prerequisite_name_defaults_to_subject_name() {
        let yaml = r#"
subjects:
  - id: MATH101
    name: Calculus I
  - id: MATH201
    prerequisite: MATH101
"#;
        let catalog = Catalog::from_yaml(yaml).unwrap();
        let subjects = catalog.subjects();

        assert_eq!(subjects[1].name(), "MATH201");
        assert_eq!(subjects[1].prerequisite_name(), Some("Calculus I"));
        assert!(subjects.iter().all(|s| !s.is_approved()));
    }
}

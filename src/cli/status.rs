use super::{open_tracker, TrackerOptions};
use crate::controller::{ConsoleNotifier, CurriculumController, Notifier};
use crate::models::Subject;
use crate::state::StateStore;
use crate::Result;
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::env;

/// Display state of one subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectState {
    Approved,
    Available,
    Locked,
}

/// Snapshot of one subject for display
#[derive(Debug, Clone, Serialize)]
pub struct SubjectStatus {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<u32>,
    pub state: SubjectState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisite: Option<String>,
}

/// Snapshot of the whole curriculum
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curriculum: Option<String>,
    pub approved: usize,
    pub total: usize,
    pub percent: usize,
    pub subjects: Vec<SubjectStatus>,
}

impl StatusReport {
    pub fn build<S: StateStore, N: Notifier>(
        curriculum: Option<String>,
        controller: &CurriculumController<S, N>,
    ) -> Self {
        let subjects = controller
            .subjects()
            .iter()
            .map(|subject| SubjectStatus {
                id: subject.id().to_string(),
                name: subject.name().to_string(),
                semester: subject.semester(),
                state: subject_state(subject, controller),
                prerequisite: subject.prerequisite_id().map(str::to_string),
            })
            .collect();

        let progress = controller.progress();
        Self {
            curriculum,
            approved: progress.approved,
            total: progress.total,
            percent: progress.percent(),
            subjects,
        }
    }

    /// Subjects grouped by semester; unscheduled subjects come last
    pub fn by_semester(&self) -> Vec<(Option<u32>, Vec<&SubjectStatus>)> {
        let mut groups: BTreeMap<(bool, u32), Vec<&SubjectStatus>> = BTreeMap::new();
        for subject in &self.subjects {
            let key = match subject.semester {
                Some(semester) => (false, semester),
                None => (true, 0),
            };
            groups.entry(key).or_default().push(subject);
        }

        groups
            .into_iter()
            .map(|((unscheduled, semester), subjects)| {
                ((!unscheduled).then_some(semester), subjects)
            })
            .collect()
    }
}

fn subject_state<S: StateStore, N: Notifier>(
    subject: &Subject,
    controller: &CurriculumController<S, N>,
) -> SubjectState {
    if subject.is_approved() {
        return SubjectState::Approved;
    }
    match subject.prerequisite_id() {
        Some(prerequisite) if !controller.is_approved(prerequisite) => SubjectState::Locked,
        _ => SubjectState::Available,
    }
}

pub fn run(options: &TrackerOptions, json: bool) -> Result<()> {
    let project_root = env::current_dir()?;
    let (tracker, catalog) = open_tracker(&project_root, options, ConsoleNotifier::new())?;
    let report = StatusReport::build(catalog.name.clone(), &tracker);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

pub fn print_report(report: &StatusReport) {
    let title = report.curriculum.as_deref().unwrap_or("Curriculum");
    println!("{}", format!("📚 {}", title).cyan().bold());

    for (semester, subjects) in report.by_semester() {
        println!();
        match semester {
            Some(semester) => println!("{}", format!("Semester {}", semester).green().bold()),
            None => println!("{}", "Unscheduled".green().bold()),
        }

        for subject in subjects {
            let line = format!("{:<10} {}", subject.id, subject.name);
            match subject.state {
                SubjectState::Approved => println!("   {} {}", "✓".green(), line.green()),
                SubjectState::Available => println!("   {} {}", "○".normal(), line),
                SubjectState::Locked => {
                    let requires = subject.prerequisite.as_deref().unwrap_or_default();
                    println!(
                        "   🔒 {} {}",
                        line.bright_black(),
                        format!("(requires {})", requires).bright_black()
                    );
                }
            }
        }
    }

    println!();
    println!(
        "   Progress: {}/{} ({}%)",
        report.approved, report.total, report.percent
    );
}

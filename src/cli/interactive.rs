use super::status::{print_report, StatusReport};
use super::toggle::print_outcome;
use super::{open_tracker, TrackerOptions};
use crate::controller::{ConsoleNotifier, CurriculumController, Notifier};
use crate::models::Subject;
use crate::state::StateStore;
use crate::Result;
use colored::Colorize;
use dialoguer::Select;
use std::env;

/// Selection loop: every pick is a click on that subject
pub fn run(options: &TrackerOptions) -> Result<()> {
    let project_root = env::current_dir()?;
    let (mut tracker, catalog) =
        open_tracker(&project_root, options, ConsoleNotifier::interactive())?;

    print_report(&StatusReport::build(catalog.name.clone(), &tracker));
    println!();
    println!("{}", "Select a subject to toggle it (Esc to quit)".cyan());

    let mut cursor = 0;
    loop {
        let mut items = menu_items(&tracker);
        items.push("Quit".to_string());

        let selection = Select::new()
            .items(&items)
            .default(cursor)
            .interact_opt()
            .map_err(|e| anyhow::anyhow!("Terminal not available: {}", e))?;

        let Some(index) = selection else { break };
        if index >= tracker.subjects().len() {
            break;
        }
        cursor = index;

        let id = tracker.subjects()[index].id().to_string();
        let outcome = tracker.handle_click(&id)?;
        print_outcome(&id, &outcome);
    }

    let progress = tracker.progress();
    println!(
        "{}",
        format!(
            "Saved. {}/{} subjects approved ({}%)",
            progress.approved,
            progress.total,
            progress.percent()
        )
        .green()
    );

    Ok(())
}

/// One menu line per subject, in catalog order
pub fn menu_items<S: StateStore, N: Notifier>(
    controller: &CurriculumController<S, N>,
) -> Vec<String> {
    controller
        .subjects()
        .iter()
        .map(menu_label)
        .collect()
}

fn menu_label(subject: &Subject) -> String {
    let mark = if subject.is_approved() { "[x]" } else { "[ ]" };
    match subject.semester() {
        Some(semester) => format!("{} S{} {} {}", mark, semester, subject.id(), subject.name()),
        None => format!("{} {} {}", mark, subject.id(), subject.name()),
    }
}

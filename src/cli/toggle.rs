use super::{open_tracker, TrackerOptions};
use crate::controller::{
    ClickOutcome, ConsoleNotifier, ControllerError, CurriculumController, Notifier,
};
use crate::state::StateStore;
use crate::Result;
use colored::Colorize;
use std::env;

pub fn run(options: &TrackerOptions, ids: &[String]) -> Result<()> {
    let project_root = env::current_dir()?;
    let (mut tracker, _) = open_tracker(&project_root, options, ConsoleNotifier::new())?;

    toggle_all(&mut tracker, ids, print_outcome)?;

    let progress = tracker.progress();
    println!(
        "   Progress: {}/{} ({}%)",
        progress.approved,
        progress.total,
        progress.percent()
    );

    Ok(())
}

/// Click each id in order, reporting every outcome as soon as it is saved
///
/// All ids are checked against the catalog first, so an unknown id fails the
/// whole batch before anything is clicked.
pub fn toggle_all<S, N, F>(
    controller: &mut CurriculumController<S, N>,
    ids: &[String],
    mut on_outcome: F,
) -> Result<Vec<ClickOutcome>>
where
    S: StateStore,
    N: Notifier,
    F: FnMut(&str, &ClickOutcome),
{
    if let Some(unknown) = ids.iter().find(|id| controller.subject(id).is_none()) {
        return Err(ControllerError::UnknownSubject(unknown.clone()).into());
    }

    let mut outcomes = Vec::with_capacity(ids.len());
    for id in ids {
        let outcome = controller.handle_click(id)?;
        on_outcome(id, &outcome);
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

pub fn print_outcome(id: &str, outcome: &ClickOutcome) {
    match outcome {
        ClickOutcome::Approved => println!("   {} {} approved", "✓".green(), id.bold()),
        ClickOutcome::Unapproved => {
            println!("   {} {} no longer approved", "↺".yellow(), id.bold())
        }
        ClickOutcome::Rejected {
            prerequisite_id, ..
        } => println!(
            "   {} {} unchanged (needs {})",
            "⛔".red(),
            id.bold(),
            prerequisite_id
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::RecordingNotifier;
    use crate::models::Subject;
    use crate::state::{ApprovalStore, KeyValueStore, MemoryStorage};

    #[test]
    fn test_toggle_all_in_order() {
        let storage = MemoryStorage::new();
        let mut controller = CurriculumController::new(
            vec![
                Subject::new("A", "A", None, None, None),
                Subject::new("B", "B", None, Some("A".to_string()), None),
            ],
            ApprovalStore::new(storage.clone()),
            RecordingNotifier::new(),
        )
        .unwrap();

        let ids = vec!["B".to_string(), "A".to_string(), "B".to_string()];
        let outcomes = toggle_all(&mut controller, &ids, |_, _| {}).unwrap();

        assert!(outcomes[0].is_rejected());
        assert_eq!(outcomes[1], ClickOutcome::Approved);
        assert_eq!(outcomes[2], ClickOutcome::Approved);
        assert_eq!(
            storage.get_item("asignaturasAprobadas").unwrap(),
            Some(r#"["A","B"]"#.to_string())
        );
    }

    #[test]
    fn test_toggle_all_stops_on_unknown_id() {
        let mut controller = CurriculumController::new(
            vec![Subject::new("A", "A", None, None, None)],
            ApprovalStore::new(MemoryStorage::new()),
            RecordingNotifier::new(),
        )
        .unwrap();

        let ids = vec!["X".to_string(), "A".to_string()];
        assert!(toggle_all(&mut controller, &ids, |_, _| {}).is_err());
        assert!(!controller.is_approved("A"));
    }

    #[test]
    fn test_toggle_all_unknown_id_later_in_batch_changes_nothing() {
        let storage = MemoryStorage::new();
        let mut controller = CurriculumController::new(
            vec![Subject::new("A", "A", None, None, None)],
            ApprovalStore::new(storage.clone()),
            RecordingNotifier::new(),
        )
        .unwrap();

        let mut reported = Vec::new();
        let ids = vec!["A".to_string(), "BOGUS".to_string()];
        let result = toggle_all(&mut controller, &ids, |id, _| reported.push(id.to_string()));

        let message = result.err().unwrap().to_string();
        assert!(message.contains("BOGUS"));
        assert!(!controller.is_approved("A"));
        assert!(reported.is_empty());
        assert_eq!(storage.get_item("asignaturasAprobadas").unwrap(), None);
    }

    #[test]
    fn test_toggle_all_reports_each_outcome() {
        let mut controller = CurriculumController::new(
            vec![
                Subject::new("A", "A", None, None, None),
                Subject::new("B", "B", None, None, None),
            ],
            ApprovalStore::new(MemoryStorage::new()),
            RecordingNotifier::new(),
        )
        .unwrap();

        let mut reported = Vec::new();
        let ids = vec!["A".to_string(), "B".to_string(), "A".to_string()];
        toggle_all(&mut controller, &ids, |id, outcome| {
            reported.push((id.to_string(), outcome.clone()))
        })
        .unwrap();

        assert_eq!(
            reported,
            vec![
                ("A".to_string(), ClickOutcome::Approved),
                ("B".to_string(), ClickOutcome::Approved),
                ("A".to_string(), ClickOutcome::Unapproved),
            ]
        );
    }
}

//! User-facing notices
//!
//! A notice is shown synchronously when a click is rejected. The console
//! implementation blocks until the user acknowledges it when running
//! interactively.

use colored::Colorize;
use dialoguer::Confirm;

/// Message shown when `prerequisite_name` has not been approved yet
pub fn prerequisite_notice(prerequisite_name: &str) -> String {
    format!(
        "🚨 Prerequisite pending! You must approve \"{}\" before marking this subject.",
        prerequisite_name
    )
}

/// Receives user-facing notices
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, message: &str) {
        (**self).notify(message);
    }
}

/// Prints notices to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier {
    interactive: bool,
}

impl ConsoleNotifier {
    /// Print and return immediately
    pub fn new() -> Self {
        Self { interactive: false }
    }

    /// Print and wait for the user to acknowledge
    pub fn interactive() -> Self {
        Self { interactive: true }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, message: &str) {
        eprintln!("{}", message.red().bold());

        if self.interactive {
            if let Some(warning) = acknowledgement_warning(acknowledge()) {
                eprintln!("{}", warning);
            }
        }
    }
}

/// Block until the user confirms the notice
fn acknowledge() -> anyhow::Result<bool> {
    Confirm::new()
        .with_prompt("Continue?")
        .default(true)
        .show_default(false)
        .interact()
        .map_err(|e| anyhow::anyhow!("Terminal not available: {}", e))
}

/// Warning line for a prompt that could not be shown
fn acknowledgement_warning(result: anyhow::Result<bool>) -> Option<String> {
    result
        .err()
        .map(|e| format!("Warning: Could not wait for acknowledgement: {}", e))
}

/// Keeps every notice it receives
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Vec<String>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

//! Pure formatting functions for check output.
//!
//! `format_*` functions build the message text and are unit tested;
//! `display_*` functions add color and print.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::check::{CheckOutcome, CheckReport};
use crate::domain::Rejection;

/// Message describing a check outcome
pub fn format_outcome(outcome: &CheckOutcome) -> String {
    match outcome {
        CheckOutcome::Accepted {
            candidate,
            previous: Some(previous),
        } => format!(
            "New tag {} is valid (latest: {}).",
            candidate.tag_name(),
            previous.tag_name()
        ),
        CheckOutcome::Accepted {
            candidate,
            previous: None,
        } => format!("New tag {} is valid as the first version tag.", candidate.tag_name()),
        CheckOutcome::Rejected {
            candidate,
            previous,
            reason,
        } => match reason {
            Rejection::DuplicateTag => {
                format!("New tag {} is not valid: {}.", candidate.tag_name(), reason)
            }
            _ => format!(
                "New tag {} is not valid: {} (latest: {}).",
                candidate.tag_name(),
                reason,
                previous.tag_name()
            ),
        },
        CheckOutcome::Present { tag } => format!("Tag {} exists in repository.", tag),
        CheckOutcome::Missing { tag } => {
            format!("Tag {} does not exist in repository, but it should.", tag)
        }
    }
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Print warnings, then the outcome as success or error.
pub fn display_report(report: &CheckReport) {
    for warning in &report.warnings {
        display_boundary_warning(warning);
    }

    let message = format_outcome(&report.outcome);
    if report.passed() {
        display_success(&message);
    } else {
        display_error(&message);
    }
}

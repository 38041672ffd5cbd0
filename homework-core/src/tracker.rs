//! Change tracking
//!
//! Pure decisions over [`PollState`]. The caller commits state only after a
//! message is actually delivered.

use crate::domain::{AssignmentRecord, PollState};

/// Outcome of comparing the newest record against what was last delivered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The record differs from the last delivered one
    Notify(AssignmentRecord),
    /// Same name and status as the last delivered record
    Skip,
}

/// Decides whether the newest record needs a notification
pub fn observe(newest: &AssignmentRecord, state: &PollState) -> Decision {
    match &state.last_notified_record {
        Some(last) if last == newest => Decision::Skip,
        _ => Decision::Notify(newest.clone()),
    }
}

/// Decides whether a failure text should be forwarded to the chat
pub fn should_report_failure(message: &str, state: &PollState) -> bool {
    state.last_notified_failure.as_deref() != Some(message)
}

//! Poll envelope and in-memory poll state

use serde_json::Value;

use super::homework::AssignmentRecord;

/// A validated status response
///
/// Records stay raw here: a malformed record is reported when it is rendered,
/// not when the envelope is checked.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusResponse {
    /// Assignment records, most recent first
    pub homeworks: Vec<Value>,
    /// Cursor for the next poll, in unix seconds
    pub current_date: i64,
}

impl StatusResponse {
    /// The record of interest: element 0, if the list is not empty
    pub fn newest(&self) -> Option<&Value> {
        self.homeworks.first()
    }
}

/// What the poller remembers between cycles
///
/// Lives for the process lifetime only; a restart may re-notify once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollState {
    /// `from_date` for the next request, in unix seconds
    pub cursor: i64,
    /// Last assignment notification that was actually delivered
    pub last_notified_record: Option<AssignmentRecord>,
    /// Last failure text that was actually delivered
    pub last_notified_failure: Option<String>,
}

impl PollState {
    pub fn new(cursor: i64) -> Self {
        Self {
            cursor,
            ..Self::default()
        }
    }

    /// Fresh state whose cursor is the current time
    pub fn starting_now() -> Self {
        Self::new(chrono::Utc::now().timestamp())
    }
}

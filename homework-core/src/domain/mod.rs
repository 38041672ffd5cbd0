//! Core domain types
//!
//! These types represent what the status service reports (assignment records
//! and the response envelope) and what the poller remembers between cycles.

pub mod homework;
pub mod poll;

pub use homework::{AssignmentRecord, HomeworkStatus};
pub use poll::{PollState, StatusResponse};

/// Wire name of the assignments list in the status response
pub const HOMEWORKS_FIELD: &str = "homeworks";
/// Wire name of the cursor in the status response
pub const CURRENT_DATE_FIELD: &str = "current_date";
/// Wire name of the assignment name in a record
pub const HOMEWORK_NAME_FIELD: &str = "homework_name";
/// Wire name of the review status in a record
pub const STATUS_FIELD: &str = "status";

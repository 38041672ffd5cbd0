//! Scheduler layer for the bot
//!
//! Runs the poll cycle on a fixed interval and owns the poll state.

pub mod poller;

pub use poller::{CycleOutcome, HomeworkPoller};

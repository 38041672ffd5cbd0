//! Homework Core
//!
//! Core types and decision logic for the homework status bot.
//!
//! This crate contains:
//! - Domain types: assignment records, review statuses, poll state
//! - Error taxonomy: the single `Failure` type shared by every component
//! - Validation: shape checks on the decoded status payload
//! - Verdicts: rendering a record into the chat sentence
//! - Tracking: deciding whether a record or a failure is worth a notification
//!
//! Nothing here performs I/O; the client and bot crates do.

pub mod domain;
pub mod error;
pub mod tracker;
pub mod validation;
pub mod verdict;

pub use error::{Failure, FailureKind, Result};

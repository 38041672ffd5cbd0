//! Homework poller
//!
//! One cycle: fetch, validate, decide, notify. Any failure is contained at the
//! cycle boundary, logged, and forwarded to the chat once per distinct text.
//! Between cycles the poller sleeps for a fixed period; that sleep is the only
//! place the loop waits on purpose.

use std::sync::Arc;
use std::time::Duration;

use homework_core::domain::{AssignmentRecord, PollState};
use homework_core::tracker::{self, Decision};
use homework_core::{Failure, Result, validation, verdict};
use tracing::{debug, error, info, warn};

use crate::repository::{Notifier, StatusRepository};

/// Prefix of every failure forwarded to the chat
const FAILURE_PREFIX: &str = "Сбой в работе программы";

/// Result of a single poll cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A changed status was delivered to the chat
    Notified(AssignmentRecord),
    /// The newest record was already delivered
    Unchanged,
    /// The response carried no records
    NoUpdates,
    /// A changed status was detected but could not be delivered
    DeliveryFailed(Failure),
    /// Fetching, validating, or reading the record failed
    Failed {
        failure: Failure,
        /// Whether the failure text reached the chat this cycle
        reported: bool,
    },
}

/// Poller that checks homework statuses forever
pub struct HomeworkPoller {
    statuses: Arc<dyn StatusRepository>,
    notifier: Arc<dyn Notifier>,
    retry_period: Duration,
}

impl HomeworkPoller {
    /// Creates a new poller
    pub fn new(
        statuses: Arc<dyn StatusRepository>,
        notifier: Arc<dyn Notifier>,
        retry_period: Duration,
    ) -> Self {
        Self {
            statuses,
            notifier,
            retry_period,
        }
    }

    /// Starts the polling loop
    ///
    /// Never returns; the process is stopped from outside.
    pub async fn run(&self, mut state: PollState) {
        info!(
            "Starting homework poller (interval: {:?}, from_date: {})",
            self.retry_period, state.cursor
        );

        loop {
            match self.poll_once(&mut state).await {
                CycleOutcome::Notified(record) => {
                    info!("Notified about {} -> {}", record.name, record.status);
                }
                CycleOutcome::Unchanged => debug!("Newest status already sent"),
                CycleOutcome::NoUpdates => debug!("No new statuses"),
                CycleOutcome::DeliveryFailed(e) => {
                    warn!("Status change not delivered, will retry on next change: {}", e);
                }
                CycleOutcome::Failed { reported, .. } => {
                    debug!("Cycle failed (reported to chat: {})", reported);
                }
            }

            tokio::time::sleep(self.retry_period).await;
        }
    }

    /// Performs a single poll cycle against `state`
    pub async fn poll_once(&self, state: &mut PollState) -> CycleOutcome {
        match self.check_statuses(state).await {
            Ok(outcome) => outcome,
            Err(failure) => self.handle_failure(failure, state).await,
        }
    }

    async fn check_statuses(&self, state: &mut PollState) -> Result<CycleOutcome> {
        let payload = self.statuses.fetch(state.cursor).await?;
        let response = validation::validate(payload)?;

        info!(
            "Received {} homework record(s), next from_date={}",
            response.homeworks.len(),
            response.current_date
        );
        state.cursor = response.current_date;

        let Some(newest) = response.newest() else {
            return Ok(CycleOutcome::NoUpdates);
        };
        let record = AssignmentRecord::from_value(newest)?;

        match tracker::observe(&record, state) {
            Decision::Skip => Ok(CycleOutcome::Unchanged),
            Decision::Notify(record) => {
                let message = verdict::render(&record);
                match self.notifier.send(&message).await {
                    Ok(()) => {
                        state.last_notified_record = Some(record.clone());
                        Ok(CycleOutcome::Notified(record))
                    }
                    // Delivery failures never go down the failure-report path
                    Err(e) => Ok(CycleOutcome::DeliveryFailed(e)),
                }
            }
        }
    }

    async fn handle_failure(&self, failure: Failure, state: &mut PollState) -> CycleOutcome {
        error!("Poll cycle failed: {}", failure);

        let message = format!("{}: {}", FAILURE_PREFIX, failure);
        if !tracker::should_report_failure(&message, state) {
            debug!("Failure already reported to chat, not resending");
            return CycleOutcome::Failed {
                failure,
                reported: false,
            };
        }

        let reported = self.notifier.send(&message).await.is_ok();
        if reported {
            state.last_notified_failure = Some(message);
        }

        CycleOutcome::Failed { failure, reported }
    }
}

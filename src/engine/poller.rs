//! The poll loop.
//!
//! Every cycle fetches the updates since the last seen timestamp, validates
//! the payload, formats the newest submission into a [`Report`] and sends it
//! when it differs from the last one sent. Operational failures travel the
//! same path as a synthetic failure report, so each distinct failure reaches
//! the chat once. Nothing that happens inside a cycle stops the loop.

use std::{sync::Arc, time::Duration};

use thiserror::Error;

use crate::{
    engine::{
        change_detector::should_notify,
        response_validator::{ResponseError, extract_submissions, next_poll_timestamp},
        status_formatter::{FormatError, decode_submission, report_for},
    },
    models::Report,
    notification::Notifier,
    providers::{ApiError, HomeworkSource},
};

/// Any failure of a single poll cycle.
#[derive(Debug, Error)]
pub enum CycleError {
    /// The request to the review API failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The payload could not be validated.
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// The newest submission breaks the data contract.
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl CycleError {
    /// Failures that are skipped without telling the chat.
    pub fn is_silent(&self) -> bool {
        matches!(self, CycleError::Response(ResponseError::Empty))
    }
}

/// What a cycle ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A new report was delivered.
    Notified,
    /// The report equals the last one sent.
    Suppressed,
    /// The API had nothing to say; nothing was compared or sent.
    Skipped,
    /// A new report was produced but the chat could not be reached.
    DeliveryFailed,
}

/// Process-lifetime state of the loop, owned by the [`Poller`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    /// Lower bound (Unix seconds) of the next request.
    pub last_seen_timestamp: i64,
    /// The last report handed to the notifier.
    pub previous_report: Report,
    /// The report of the latest cycle.
    pub current_report: Report,
}

impl PollState {
    /// Fresh state starting from `now`.
    pub fn new(now: i64) -> Self {
        Self {
            last_seen_timestamp: now,
            previous_report: Report::default(),
            current_report: Report::default(),
        }
    }
}

/// Drives the poll cycles against a source and a notifier.
pub struct Poller<S: HomeworkSource + ?Sized, N: Notifier + ?Sized> {
    source: Arc<S>,
    notifier: Arc<N>,
    chat_id: String,
    interval: Duration,
    state: PollState,
}

impl<S: HomeworkSource + ?Sized, N: Notifier + ?Sized> Poller<S, N> {
    /// Creates a poller whose first request starts at the current time.
    pub fn new(
        source: Arc<S>,
        notifier: Arc<N>,
        chat_id: impl Into<String>,
        interval: Duration,
    ) -> Self {
        let state = PollState::new(chrono::Utc::now().timestamp());
        Self::with_state(source, notifier, chat_id, interval, state)
    }

    /// Creates a poller resuming from an explicit state.
    pub fn with_state(
        source: Arc<S>,
        notifier: Arc<N>,
        chat_id: impl Into<String>,
        interval: Duration,
        state: PollState,
    ) -> Self {
        Self { source, notifier, chat_id: chat_id.into(), interval, state }
    }

    /// Current loop state.
    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Runs cycles forever, sleeping the fixed interval after each one.
    pub async fn run(mut self) {
        tracing::info!(
            interval_secs = self.interval.as_secs(),
            "Starting homework status polling."
        );
        loop {
            let outcome = self.poll_once().await;
            tracing::debug!(
                ?outcome,
                next_from_date = self.state.last_seen_timestamp,
                "Poll cycle finished."
            );
            tokio::time::sleep(self.interval).await;
        }
    }

    /// Runs a single fetch, validate, format, compare and notify cycle.
    pub async fn poll_once(&mut self) -> CycleOutcome {
        let period_start = self.state.last_seen_timestamp;
        let report = match evaluate(&*self.source, &mut self.state.last_seen_timestamp).await {
            Ok(report) => report,
            Err(e) if e.is_silent() => {
                tracing::debug!(error = %e, "No homework data in the API response, skipping.");
                return CycleOutcome::Skipped;
            }
            Err(e) => {
                tracing::error!(error = %e, "Poll cycle failed.");
                Report::failure(&e)
            }
        };
        self.state.current_report = report;

        if !should_notify(&self.state.previous_report, &self.state.current_report) {
            tracing::debug!("No new statuses.");
            return CycleOutcome::Suppressed;
        }

        let text = self.state.current_report.text(period_start);
        let outcome = match self.notifier.notify(&self.chat_id, &text).await {
            Ok(()) => CycleOutcome::Notified,
            Err(e) => {
                tracing::error!(error = %e, "Failed to deliver the report to the chat.");
                CycleOutcome::DeliveryFailed
            }
        };
        // Committed whatever the delivery outcome.
        self.state.previous_report = self.state.current_report.clone();
        outcome
    }
}

/// Fetches updates since `since`, then formats the newest submission.
///
/// `since` is advanced as soon as the response carries a usable
/// `current_date`, even when the rest of the payload is rejected.
pub async fn evaluate<S: HomeworkSource + ?Sized>(
    source: &S,
    since: &mut i64,
) -> Result<Report, CycleError> {
    let response = source.fetch_updates(*since).await?;
    if let Some(timestamp) = next_poll_timestamp(&response) {
        *since = timestamp;
    }

    let submissions = extract_submissions(&response)?;
    let Some(newest) = submissions.first() else {
        return Ok(Report::no_submissions());
    };
    let latest = decode_submission(newest)?;
    tracing::info!(
        homework = latest.name.as_deref().unwrap_or_default(),
        "Latest homework received."
    );
    Ok(report_for(&latest)?)
}

//! The bot's summary of one poll cycle.

use chrono::DateTime;

/// Fixed part of the report for a polled window without submissions.
pub const NO_SUBMISSIONS_MESSAGE: &str = "до настоящего момента домашних работ нет.";

/// Prefix of every message reporting an operational failure.
pub const FAILURE_PREFIX: &str = "Сбой в работе программы";

/// Outcome of a poll cycle, compared field by field against the previously
/// sent one to decide whether to notify.
///
/// `Report::default()` is the sentinel the bot starts with; it never equals
/// a report produced by a cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Name of the reported submission, if any.
    pub name: Option<String>,
    /// The compared message. See [`Report::text`] for what is delivered.
    pub message: String,
    /// Reviewer comment of the reported submission, if any.
    pub comment: Option<String>,
}

impl Report {
    /// Report for a successfully formatted submission.
    pub fn submission(
        name: impl Into<String>,
        message: impl Into<String>,
        comment: Option<String>,
    ) -> Self {
        Self { name: Some(name.into()), message: message.into(), comment }
    }

    /// Report for a cycle where the API returned an empty list.
    pub fn no_submissions() -> Self {
        Self { name: None, message: NO_SUBMISSIONS_MESSAGE.to_string(), comment: None }
    }

    /// Report carrying an operational failure.
    pub fn failure(error: &dyn std::error::Error) -> Self {
        Self { name: None, message: format!("{FAILURE_PREFIX}: {error}"), comment: None }
    }

    /// Whether this is the report for an empty submissions list.
    pub fn is_no_submissions(&self) -> bool {
        self.name.is_none() && self.message == NO_SUBMISSIONS_MESSAGE
    }

    /// The text delivered to the chat for a window starting at
    /// `period_start` (Unix seconds).
    ///
    /// Only the no-submissions report mentions the period, and the period is
    /// never part of the compared fields.
    pub fn text(&self, period_start: i64) -> String {
        if !self.is_no_submissions() {
            return self.message.clone();
        }
        let start = DateTime::from_timestamp(period_start, 0)
            .map(|start| start.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_else(|| period_start.to_string());
        format!("За период c {start} {}", self.message)
    }

    /// Whether this is the initial, never-sent report.
    pub fn is_sentinel(&self) -> bool {
        *self == Self::default()
    }
}

//! Builders for `Submission` values and the API payloads that carry them.

use serde_json::{Value, json};

use crate::models::Submission;

/// A builder for creating `Submission` instances in tests.
#[derive(Debug, Clone, Default)]
pub struct SubmissionBuilder {
    submission: Submission,
}

impl SubmissionBuilder {
    /// Creates a new `SubmissionBuilder` with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the homework name.
    pub fn name(mut self, name: &str) -> Self {
        self.submission.name = Some(name.to_string());
        self
    }

    /// Sets the raw review status.
    pub fn status(mut self, status: &str) -> Self {
        self.submission.status = Some(status.to_string());
        self
    }

    /// Sets the reviewer comment.
    pub fn reviewer_comment(mut self, comment: &str) -> Self {
        self.submission.reviewer_comment = Some(comment.to_string());
        self
    }

    /// Builds the `Submission`.
    pub fn build(self) -> Submission {
        self.submission
    }
}

/// Builds a well-formed homework statuses response, newest submission first.
pub fn homework_response(submissions: &[Submission], current_date: i64) -> Value {
    json!({ "homeworks": submissions, "current_date": current_date })
}

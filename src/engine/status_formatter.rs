//! Turns a submission into the message sent to the chat.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::{
    engine::response_validator::kind,
    models::{HomeworkStatus, Report, Submission},
};

/// A submission that breaks the API data contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// A mandatory field is absent.
    #[error("Отсутствует ключ \"{0}\" в ответе API")]
    MissingField(&'static str),

    /// The status is absent or not one of the known verdict keys.
    #[error("Неизвестный статус работы: \"{0}\"")]
    UnknownStatus(String),

    /// The newest entry is not a JSON object.
    #[error("Запись о домашней работе не является объектом: {0}")]
    NotAnObject(&'static str),
}

/// Decodes the newest entry of the submissions list.
pub fn decode_submission(entry: &Value) -> Result<Submission, FormatError> {
    if !entry.is_object() {
        return Err(FormatError::NotAnObject(kind(entry)));
    }
    // Field decoders accept any JSON value, so an object always decodes.
    Submission::deserialize(entry).map_err(|_| FormatError::NotAnObject(kind(entry)))
}

/// Formats the status-change message for `submission`.
///
/// `Изменился статус проверки работы "<name>". <verdict>`, followed by the
/// reviewer comment when there is a non-blank one.
pub fn format_status(submission: &Submission) -> Result<String, FormatError> {
    let name = submission.name.as_deref().ok_or(FormatError::MissingField("homework_name"))?;
    let raw_status = submission.status.as_deref().unwrap_or_default();
    let status: HomeworkStatus = raw_status.parse().map_err(FormatError::UnknownStatus)?;

    let mut message =
        format!("Изменился статус проверки работы \"{name}\". {}", status.verdict());
    if let Some(comment) = reviewer_comment(submission) {
        message.push_str(&format!(" Комментарий к работе: {comment}."));
    }
    Ok(message)
}

/// Builds the cycle report for the newest submission.
pub fn report_for(submission: &Submission) -> Result<Report, FormatError> {
    let message = format_status(submission)?;
    let name = submission.name.clone().unwrap_or_default();
    Ok(Report::submission(name, message, reviewer_comment(submission).map(str::to_string)))
}

fn reviewer_comment(submission: &Submission) -> Option<&str> {
    submission.reviewer_comment.as_deref().map(str::trim).filter(|c| !c.is_empty())
}

//! Homework submissions as returned by the review API.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single homework item as reported by the review API.
///
/// Decoding any JSON object succeeds: the API is not under our control, and
/// missing or mistyped values are reported by the status formatter rather
/// than rejected here. A non-string `status` keeps its literal JSON text so
/// it can be reported as an unknown status; a non-string name or comment is
/// treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Name of the homework, e.g. `username__project.zip`.
    #[serde(rename = "homework_name", default, deserialize_with = "string_or_none")]
    pub name: Option<String>,

    /// Raw review status as sent by the API.
    #[serde(default, deserialize_with = "literal_or_none")]
    pub status: Option<String>,

    /// Free-form comment left by the reviewer.
    #[serde(default, deserialize_with = "string_or_none")]
    pub reviewer_comment: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

fn literal_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        other => Ok(Some(other.to_string())),
    }
}

/// The review statuses the bot knows how to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    /// The work was accepted.
    Approved,
    /// A reviewer picked the work up.
    Reviewing,
    /// The reviewer left remarks to address.
    Rejected,
}

impl HomeworkStatus {
    /// Human-readable verdict for this status.
    pub fn verdict(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }

    /// Wire representation of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = String;

    /// Case-sensitive: `"Approved"` is not a known status.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(HomeworkStatus::Approved),
            "reviewing" => Ok(HomeworkStatus::Reviewing),
            "rejected" => Ok(HomeworkStatus::Rejected),
            other => Err(other.to_string()),
        }
    }
}

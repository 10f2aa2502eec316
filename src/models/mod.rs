//! This module contains the data models for the homework bot.

pub mod report;
pub mod submission;

pub use report::Report;
pub use submission::{HomeworkStatus, Submission};

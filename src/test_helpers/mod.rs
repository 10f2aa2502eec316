//! A set of helpers for testing

mod http_client;
mod submission;

pub use http_client::{create_test_http_client, create_test_retrying_http_client};
pub use submission::{SubmissionBuilder, homework_response};

#![warn(missing_docs)]
//! Homework Bot polls a homework review API and reports review status
//! changes to a Telegram chat.

pub mod cmd;
pub mod config;
pub mod engine;
pub mod http_client;
pub mod logging;
pub mod models;
pub mod notification;
pub mod providers;
pub mod test_helpers;

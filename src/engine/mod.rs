//! The engine turns raw API payloads into reports and decides when to send
//! them.

pub mod change_detector;
pub mod poller;
pub mod response_validator;
pub mod status_formatter;

pub use poller::{CycleError, CycleOutcome, PollState, Poller};

//! Sources of homework status updates.

pub mod practicum;
pub mod traits;

pub use practicum::PracticumClient;
pub use traits::{ApiError, HomeworkSource};

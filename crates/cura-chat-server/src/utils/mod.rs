pub mod error;

pub use error::{ApiError, GENERIC_FAILURE_REPLY};

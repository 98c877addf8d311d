//! HTTP middleware implementations

mod error_logger;

pub use error_logger::{ErrorLogger, ErrorLoggerService, RequestBody};

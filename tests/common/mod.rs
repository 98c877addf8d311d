//! Common test utilities for apeer-rerank
//!
//! - Request fixtures
//! - Completion providers with scripted replies
//!
//! # Usage
//!
//! ```rust
//! use crate::common::{fixtures, providers};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let provider = providers::ScriptedProvider::replying("[rankstart] 1 > 0 [rankend]");
//!     let request = fixtures::capital_request();
//!     // ...
//! }
//! ```

pub mod fixtures;
pub mod providers;

// Re-export commonly used items
pub use fixtures::{capital_request, ranking_reply};
pub use providers::ScriptedProvider;

/// Skip test if environment variable is not set
#[macro_export]
macro_rules! skip_without_env {
    ($var:expr) => {
        if std::env::var($var).is_err() {
            eprintln!("Skipping test: {} environment variable not set", $var);
            return;
        }
    };
}

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}

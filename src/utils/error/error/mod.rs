//! Error handling for the rerank gateway
//!
//! This module defines all error types used throughout the gateway.

#![allow(missing_docs)]

mod conversions;
mod helpers;
mod response;
mod types;

pub use response::{BAD_REQUEST_PREFIX, RERANK_FAILURE_PREFIX};
pub use types::{GatewayError, Result};

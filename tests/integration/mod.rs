//! Integration tests
//!
//! Run with: `cargo test --test lib`

pub mod http_tests;
pub mod vertex_rerank_tests;

//! End-to-end tests against a live Vertex AI project
//!
//! These tests are ignored by default. Run with:
//! `PROJECT_ID=my-project cargo test -- --ignored`

pub mod vertex;

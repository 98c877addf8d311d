//! Core traits shared across the gateway

pub mod completion;

pub use completion::CompletionProvider;

//! Completion backends

pub mod vertex_ai;

pub use vertex_ai::{VertexAIProvider, VertexAIProviderConfig};

//! Type conversions for GatewayError

use super::types::GatewayError;
use crate::core::providers::vertex_ai::VertexAIError;

// Every Vertex failure is a completion-boundary failure from the gateway's view
impl From<VertexAIError> for GatewayError {
    fn from(err: VertexAIError) -> Self {
        GatewayError::Completion(err.to_string())
    }
}

//! Live Gemini ranking

#[cfg(test)]
mod tests {
    use crate::common::capital_request;
    use crate::skip_without_env;
    use apeer_rerank::core::providers::{VertexAIProvider, VertexAIProviderConfig};
    use apeer_rerank::core::rerank::RankingValidation;
    use apeer_rerank::{CompletionProvider, RerankService};
    use std::sync::Arc;

    async fn live_provider() -> VertexAIProvider {
        let config = VertexAIProviderConfig {
            project_id: std::env::var("PROJECT_ID").unwrap(),
            location: std::env::var("LOCATION").unwrap_or_else(|_| "us-central1".to_string()),
            timeout_seconds: 60,
            ..Default::default()
        };
        VertexAIProvider::from_env(config).await.unwrap()
    }

    #[tokio::test]
    #[ignore]
    async fn test_vertex_completion() {
        skip_without_env!("PROJECT_ID");

        let provider = live_provider().await;
        let reply = provider
            .complete("gemini-1.5-flash", "Reply with the single word: ready")
            .await
            .unwrap();
        assert!(!reply.trim().is_empty());
    }

    #[tokio::test]
    #[ignore]
    async fn test_vertex_rerank() {
        skip_without_env!("PROJECT_ID");

        // Models occasionally drop a passage; judge the ordering, not completeness
        let service = RerankService::new(Arc::new(live_provider().await))
            .with_validation(RankingValidation::Lenient);
        let response = service.rerank(&capital_request()).await.unwrap();

        assert!(!response.results.is_empty());
        assert_eq!(response.results[0].index, 1);
    }
}

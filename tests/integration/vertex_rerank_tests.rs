//! Rerank service driving the Vertex AI client against a mock endpoint

#[cfg(test)]
mod tests {
    use crate::common::{capital_request, ranking_reply};
    use apeer_rerank::core::providers::vertex_ai::{
        VertexAIProvider, VertexAIProviderConfig, VertexAuth, VertexCredentials,
    };
    use apeer_rerank::{GatewayError, RerankService};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MODEL_PATH: &str =
        "/v1/projects/test-project/locations/us-central1/publishers/google/models/gemini-1.5-flash:generateContent";

    fn service(server: &MockServer) -> RerankService {
        let config = VertexAIProviderConfig {
            project_id: "test-project".to_string(),
            api_base: Some(format!(
                "{}/v1/projects/test-project/locations/us-central1/publishers/google/models/",
                server.uri()
            )),
            timeout_seconds: 5,
            ..Default::default()
        };
        let auth = VertexAuth::new(VertexCredentials::AccessToken("ya29.test".to_string()));
        let provider = VertexAIProvider::new(config, auth).unwrap();
        RerankService::new(Arc::new(provider))
    }

    fn gemini_reply(text: &str) -> Value {
        json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": text}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 120, "candidatesTokenCount": 9}
        })
    }

    #[tokio::test]
    async fn test_rerank_through_vertex() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .and(header("authorization", "Bearer ya29.test"))
            .and(body_partial_json(json!({
                "contents": [{"role": "user"}],
                "generation_config": {"temperature": 0.7, "topP": 0.95, "topK": 40}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply(&ranking_reply(&[1, 2, 0]))))
            .expect(1)
            .mount(&server)
            .await;

        let response = service(&server).rerank(&capital_request()).await.unwrap();

        let indices: Vec<usize> = response.results.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 2, 0]);
        assert_eq!(response.results[0].relevance_score, 1.0);
        assert!(!response.id.is_empty());
    }

    #[tokio::test]
    async fn test_prompt_is_sent_as_single_user_part() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply(&ranking_reply(&[0, 1, 2]))))
            .mount(&server)
            .await;

        service(&server).rerank(&capital_request()).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
        let parts = body["contents"][0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 1);
        let prompt = parts[0]["text"].as_str().unwrap();
        assert!(prompt.starts_with("You are RankGPT"));
        assert!(prompt.contains("[1] Paris is the capital and largest city of France."));
    }

    #[tokio::test]
    async fn test_upstream_status_becomes_completion_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(ResponseTemplate::new(429).set_body_string("quota exhausted"))
            .expect(1)
            .mount(&server)
            .await;

        let err = service(&server).rerank(&capital_request()).await.unwrap_err();
        match err {
            GatewayError::Completion(msg) => {
                assert!(msg.contains("429"), "got {}", msg);
                assert!(msg.contains("quota exhausted"), "got {}", msg);
            }
            other => panic!("expected completion error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_candidates_becomes_completion_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
            .mount(&server)
            .await;

        let err = service(&server).rerank(&capital_request()).await.unwrap_err();
        assert!(matches!(err, GatewayError::Completion(_)));
        assert!(err.to_string().contains("no content"));
    }

    #[tokio::test]
    async fn test_chatty_reply_still_parses() {
        let server = MockServer::start().await;
        let chatty = "Sure! Based on relevance:\n\n[rankstart] [1] > [0] > [2] [rankend]\n\nLet me know if you need more.";
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply(chatty)))
            .mount(&server)
            .await;

        let response = service(&server).rerank(&capital_request()).await.unwrap();
        assert_eq!(response.results[0].index, 1);
        assert_eq!(response.results[2].index, 2);
    }
}

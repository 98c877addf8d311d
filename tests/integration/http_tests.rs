//! HTTP surface over a scripted completion backend

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{CAPITAL_QUERY, capital_documents};
    use crate::common::{ScriptedProvider, ranking_reply};
    use actix_web::http::StatusCode;
    use actix_web::{test, web};
    use apeer_rerank::config::Config;
    use apeer_rerank::server::{AppState, HttpServer};
    use apeer_rerank::{GatewayError, RerankRequest, RerankService};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use std::time::Duration;

    fn app_state(provider: Arc<ScriptedProvider>) -> web::Data<AppState> {
        let mut config = Config::default();
        config.vertex.project_id = "integration-project".to_string();
        config.vertex.model = "gemini-1.5-pro".to_string();
        web::Data::new(AppState::new(config, provider))
    }

    #[actix_web::test]
    async fn test_rerank_request_reaches_backend_once() {
        let provider = Arc::new(ScriptedProvider::replying(ranking_reply(&[1, 2, 0])));
        let app = test::init_service(HttpServer::create_app(app_state(provider.clone()))).await;

        let req = test::TestRequest::post()
            .uri("/rerank")
            .set_json(json!({
                "model": "rerank-english-v3.0",
                "query": CAPITAL_QUERY,
                "documents": capital_documents(),
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let indices: Vec<u64> = body["results"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["index"].as_u64().unwrap())
            .collect();
        assert_eq!(indices, vec![1, 2, 0]);
        assert_eq!(
            body["results"][0]["document"]["text"],
            "Paris is the capital and largest city of France."
        );

        // The configured model is used, not the one named in the request
        assert_eq!(provider.calls(), 1);
        let prompts = provider.prompts();
        assert_eq!(prompts[0].0, "gemini-1.5-pro");
        assert!(prompts[0].1.contains(CAPITAL_QUERY));
        assert!(prompts[0].1.contains("[2] The Eiffel Tower was completed in 1889."));
    }

    #[actix_web::test]
    async fn test_scores_follow_rank_position() {
        let provider = Arc::new(ScriptedProvider::replying(ranking_reply(&[3, 1, 0, 2])));
        let app = test::init_service(HttpServer::create_app(app_state(provider))).await;

        let req = test::TestRequest::post()
            .uri("/v1/rerank")
            .set_json(json!({"query": "q", "documents": ["a", "b", "c", "d"]}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let scores: Vec<f64> = body["results"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["relevance_score"].as_f64().unwrap())
            .collect();
        assert_eq!(scores, vec![1.0, 0.75, 0.5, 0.25]);
    }

    #[actix_web::test]
    async fn test_top_n_larger_than_documents() {
        let provider = Arc::new(ScriptedProvider::replying(ranking_reply(&[1, 0])));
        let app = test::init_service(HttpServer::create_app(app_state(provider))).await;

        let req = test::TestRequest::post()
            .uri("/rerank")
            .set_json(json!({"query": "q", "documents": ["a", "b"], "top_n": 10}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["results"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_unknown_fields_are_ignored() {
        let provider = Arc::new(ScriptedProvider::replying(ranking_reply(&[0])));
        let app = test::init_service(HttpServer::create_app(app_state(provider))).await;

        let req = test::TestRequest::post()
            .uri("/rerank")
            .set_json(json!({
                "query": "q",
                "documents": ["a"],
                "rank_fields": ["text"],
                "max_chunks_per_doc": 4,
                "something_else": true
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_incomplete_ranking_is_server_error() {
        let provider = Arc::new(ScriptedProvider::replying(ranking_reply(&[2, 0])));
        let app = test::init_service(HttpServer::create_app(app_state(provider))).await;

        let req = test::TestRequest::post()
            .uri("/rerank")
            .set_json(json!({"query": "q", "documents": ["a", "b", "c"]}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let text = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
        assert!(text.starts_with("Error during reranking: "), "got {}", text);
    }

    #[actix_web::test]
    async fn test_backend_failure_is_not_retried() {
        let provider = Arc::new(ScriptedProvider::failing("connection reset"));
        let app = test::init_service(HttpServer::create_app(app_state(provider.clone()))).await;

        let req = test::TestRequest::post()
            .uri("/rerank")
            .set_json(json!({"query": "q", "documents": ["a", "b"]}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(provider.calls(), 1);
    }

    #[actix_web::test]
    async fn test_bad_request_skips_backend() {
        let provider = Arc::new(ScriptedProvider::replying(ranking_reply(&[0])));
        let app = test::init_service(HttpServer::create_app(app_state(provider.clone()))).await;

        let req = test::TestRequest::post()
            .uri("/rerank")
            .insert_header(("content-type", "application/json"))
            .set_payload("not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(provider.calls(), 0);
    }

    #[actix_web::test]
    async fn test_requests_are_independent() {
        let provider = Arc::new(ScriptedProvider::replying(ranking_reply(&[1, 0])));
        let app = test::init_service(HttpServer::create_app(app_state(provider.clone()))).await;

        for (query, docs) in [("first", ["x", "y"]), ("second", ["u", "v"])] {
            let req = test::TestRequest::post()
                .uri("/rerank")
                .set_json(json!({"query": query, "documents": docs}))
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body["results"][0]["document"]["text"], docs[1]);
        }

        let prompts = provider.prompts();
        assert_eq!(prompts.len(), 2);
        assert!(prompts[0].1.contains("[querystart] first [queryend]"));
        assert!(!prompts[1].1.contains("[querystart] first"));
        assert!(prompts[1].1.contains("[0] u\n\n[1] v"));
    }

    #[tokio::test]
    async fn test_slow_backend_hits_deadline() {
        let provider = Arc::new(
            ScriptedProvider::replying(ranking_reply(&[0, 1])).delayed(Duration::from_millis(500)),
        );
        let service = RerankService::new(provider.clone()).with_timeout(Duration::from_millis(50));

        let err = service
            .rerank(&RerankRequest::new("q", ["a", "b"]))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Timeout(_)));
        assert_eq!(provider.calls(), 1);
    }
}

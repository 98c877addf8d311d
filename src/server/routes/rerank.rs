//! Rerank endpoints

use crate::core::rerank::RerankRequest;
use crate::server::middleware::RequestBody;
use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, web};
use tracing::debug;

/// Paths serving the rerank API
pub const RERANK_PATHS: [&str; 2] = ["/rerank", "/v1/rerank"];

/// Configure rerank routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    for path in RERANK_PATHS {
        cfg.service(
            web::resource(path)
                .route(web::post().to(rerank))
                .default_service(web::to(method_not_allowed)),
        );
    }
}

/// Rerank documents against a query
///
/// The body is decoded by hand so a malformed payload maps to the plain-text
/// 400 contract and the raw text is available to the error logger. Only the
/// first JSON value is read.
pub async fn rerank(
    req: HttpRequest,
    state: web::Data<AppState>,
    body: web::Bytes,
) -> Result<HttpResponse, GatewayError> {
    req.extensions_mut()
        .insert(RequestBody(String::from_utf8_lossy(&body).into_owned()));

    let request = decode_request(&body)?;
    debug!(
        "Rerank request: {} documents, top_n={:?}",
        request.documents.len(),
        request.top_n
    );

    let response = state.reranker.rerank(&request).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Decode the first JSON value in `body`; anything after it is ignored
fn decode_request(body: &[u8]) -> Result<RerankRequest, GatewayError> {
    serde_json::Deserializer::from_slice(body)
        .into_iter::<RerankRequest>()
        .next()
        .unwrap_or_else(|| Err(serde::de::Error::custom("EOF while parsing a value")))
        .map_err(|e| GatewayError::bad_request(e.to_string()))
}

/// Any method other than POST on a rerank path
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, GatewayError> {
    Err(GatewayError::method_not_allowed(req.method().as_str()))
}

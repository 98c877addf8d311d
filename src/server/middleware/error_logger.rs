//! Error request logging middleware
//!
//! Emits one `error!` event for every response with status >= 400, carrying
//! enough of the request to reproduce the failure.

use actix_web::HttpMessage;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use std::time::Instant;
use tracing::error;

/// Raw request body stashed in request extensions by handlers that read it
#[derive(Debug, Clone)]
pub struct RequestBody(pub String);

/// Error request logger for Actix-web
pub struct ErrorLogger;

impl<S, B> Transform<S, ServiceRequest> for ErrorLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = ErrorLoggerService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorLoggerService { service }))
    }
}

/// Service implementation for the error logger
pub struct ErrorLoggerService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for ErrorLoggerService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let start = Instant::now();
        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await?;
            let status = res.status();

            if status.as_u16() >= 400 {
                let request = res.request();
                let method = request.method().clone();
                let body = if method == actix_web::http::Method::GET {
                    None
                } else {
                    request.extensions().get::<RequestBody>().map(|b| b.0.clone())
                };
                let error_details = res.response().error().map(|e| e.to_string());

                error!(
                    method = %method,
                    path = request.path(),
                    status = status.as_u16(),
                    duration = ?start.elapsed(),
                    query = request.query_string(),
                    body = body.as_deref().unwrap_or(""),
                    error_details = error_details.as_deref().unwrap_or(""),
                    "Request failed"
                );
            }

            Ok(res)
        })
    }
}

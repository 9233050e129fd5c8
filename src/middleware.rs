// Middleware and Extension Traits

use crate::types::*;
use async_trait::async_trait;

#[async_trait]
pub trait RequestMiddleware: Send + Sync {
    /// Process and possibly modify the request before sending
    async fn process_request(&self, request: WebCallRequest) -> Result<WebCallRequest, CupiError>;
}

#[async_trait]
pub trait ResponseMiddleware: Send + Sync {
    /// Process and possibly modify the result after receiving
    async fn process_response(&self, result: WebCallResult) -> Result<WebCallResult, CupiError>;
}

// Shared handles, so callers can keep inspecting a middleware they installed
#[async_trait]
impl<M: RequestMiddleware + ?Sized> RequestMiddleware for std::sync::Arc<M> {
    async fn process_request(&self, request: WebCallRequest) -> Result<WebCallRequest, CupiError> {
        (**self).process_request(request).await
    }
}

#[async_trait]
impl<M: ResponseMiddleware + ?Sized> ResponseMiddleware for std::sync::Arc<M> {
    async fn process_response(&self, result: WebCallResult) -> Result<WebCallResult, CupiError> {
        (**self).process_response(result).await
    }
}

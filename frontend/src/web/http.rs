//! HTTP client on top of `gloo-net`.

use authview::shared::HttpMethod;
use authview::{AuthError, AuthResult, HttpClient, HttpRequest, HttpResponse};
use gloo_net::http::Request;

/// `fetch`-backed implementation of the core HTTP seam.
///
/// Every status code is returned as a response; only failures of `fetch`
/// itself (network down, CORS, unreadable body) are errors.
#[derive(Clone, Copy, Default)]
pub struct GlooHttpClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for GlooHttpClient {
    async fn send(&self, req: HttpRequest) -> AuthResult<HttpResponse> {
        let mut builder = match req.method {
            HttpMethod::Get => Request::get(&req.url),
            HttpMethod::Post => Request::post(&req.url),
        };
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let result = match req.body {
            Some(body) => builder
                .body(body)
                .map_err(|e| AuthError::transport(format!("cannot build request: {}", e)))?
                .send()
                .await,
            None => builder.send().await,
        };
        let resp = result.map_err(|e| AuthError::transport(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| AuthError::transport(format!("cannot read body: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}

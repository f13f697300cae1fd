//! `fetch` transport.

use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::error::{ApiError, ApiResult};
use crate::http::{HttpClient, HttpRequest, HttpResponse};

fn js_error(context: &str, err: JsValue) -> String {
    format!("{}: {:?}", context, err)
}

/// Sends requests with `window.fetch`. Non-2xx statuses come back as
/// responses; only a failed exchange is an error here.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchHttpClient;

impl FetchHttpClient {
    fn build(req: &HttpRequest) -> Result<Request, JsValue> {
        let headers = Headers::new()?;
        for (key, value) in &req.headers {
            headers.set(key, value)?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());
        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        Request::new_with_str_and_init(&req.url, &opts)
    }

    async fn read_text(response: &Response) -> ApiResult<String> {
        let promise = response
            .text()
            .map_err(|e| ApiError::Decode(js_error("body unreadable", e)))?;
        let text = JsFuture::from(promise)
            .await
            .map_err(|e| ApiError::Network(js_error("body stream failed", e)))?;
        text.as_string()
            .ok_or_else(|| ApiError::Decode("response body is not text".to_string()))
    }
}

#[async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        let request = Self::build(&req)
            .map_err(|e| ApiError::Network(js_error("invalid request", e)))?;

        let window =
            web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;

        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ApiError::Network(js_error("fetch failed", e)))?;
        let response: Response = value
            .dyn_into()
            .map_err(|e| ApiError::Decode(js_error("not a Response", e)))?;

        let status = response.status();
        let body = Self::read_text(&response).await?;
        log::debug!("[Http] {} {} -> {}", req.method, req.url, status);

        Ok(HttpResponse { status, body })
    }
}

//! API client.
//!
//! Wraps a transport ([`HttpClient`]) with the conventions every call to the
//! job-board API shares: base URL, JSON content type, bearer credentials,
//! envelope decoding and one failure toast per failed call.

use std::collections::HashMap;

use async_trait::async_trait;
use headhunt_shared::{
    ApiRequest, CONTENT_TYPE_JSON, Envelope, HEADER_AUTHORIZATION, HEADER_CONTENT_TYPE,
    HttpMethod,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::credentials::{CredentialStore, KeyValueStore};
use crate::error::{ApiError, ApiResult};
use crate::notify::Notifier;

// =========================================================
// Transport abstraction
// =========================================================

#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(url: &str, method: HttpMethod) -> Self {
        Self {
            url: url.to_string(),
            method,
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> ApiResult<T> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// One request, one response. No retries, no timeout.
///
/// `?Send` because browser futures hold `JsValue`s.
#[async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse>;
}

// =========================================================
// API client
// =========================================================

/// Toast text for a failed call, by verb.
pub fn failure_message(method: HttpMethod) -> &'static str {
    match method {
        HttpMethod::Get => "Failed to fetch data",
        HttpMethod::Post => "Operation failed",
        HttpMethod::Put => "Update failed",
        HttpMethod::Delete => "Delete operation failed",
    }
}

#[derive(Clone)]
pub struct ApiClient<H, K, N> {
    http: H,
    base_url: String,
    credentials: CredentialStore<K>,
    notifier: N,
}

impl<H, K, N> ApiClient<H, K, N>
where
    H: HttpClient,
    K: KeyValueStore,
    N: Notifier,
{
    pub fn new(
        http: H,
        base_url: impl Into<String>,
        credentials: CredentialStore<K>,
        notifier: N,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            credentials,
            notifier,
        }
    }

    pub fn credentials(&self) -> &CredentialStore<K> {
        &self.credentials
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Performs one call and decodes the envelope.
    ///
    /// On failure the user has already been notified when this returns; the
    /// caller must not notify again.
    pub async fn request<B, T>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<Envelope<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        match self.exchange(method, path, body).await {
            Ok(envelope) => Ok(envelope),
            Err(err) => {
                log::error!("[Api] {} {} failed: {}", method, path, err);
                self.notifier.error(failure_message(method));
                Err(err)
            }
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Envelope<T>> {
        self.request::<(), T>(HttpMethod::Get, path, None).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<Envelope<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(HttpMethod::Post, path, Some(body)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<Envelope<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(HttpMethod::Put, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<Envelope<T>> {
        self.request::<(), T>(HttpMethod::Delete, path, None).await
    }

    /// Typed call driven by the request's `PATH`/`METHOD`.
    pub async fn send<R: ApiRequest>(&self, request: &R) -> ApiResult<Envelope<R::Response>> {
        let body = R::METHOD.carries_body().then_some(request);
        self.request(R::METHOD, R::PATH, body).await
    }

    async fn exchange<B, T>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<Envelope<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut req = HttpRequest::new(&self.url(path), method)
            .with_header(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON);

        if let Some(token) = self.credentials.token() {
            req = req.with_header(HEADER_AUTHORIZATION, &format!("Bearer {token}"));
        }

        if let Some(body) = body {
            let json = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
            req = req.with_body(json);
        }

        let resp = self.http.send(req).await?;
        if !resp.is_success() {
            return Err(ApiError::HttpStatus {
                status: resp.status,
            });
        }

        resp.json::<Envelope<T>>()
    }
}

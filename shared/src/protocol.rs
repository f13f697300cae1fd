use crate::{Application, Job, Resume, Role, STATUS_OK};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Only POST and PUT carry a JSON body; GET and DELETE go out bare.
    pub fn carries_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The `data` payload type inside the response envelope.
    type Response: DeserializeOwned;
    /// The URL path relative to the API base.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
}

// =========================================================
// Envelope
// =========================================================

/// Paging and auth details attached to some responses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_elements: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// The `{status, data, meta}` wrapper every API response uses.
///
/// The schema is not validated beyond what serde needs; `data` may be
/// missing entirely (the login endpoint only fills `meta`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl<T> Envelope<T> {
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// `data` when the status is OK, otherwise nothing.
    pub fn into_ok_data(self) -> Option<T> {
        if self.is_ok() { self.data } else { None }
    }

    pub fn token(&self) -> Option<&str> {
        self.meta
            .as_ref()
            .and_then(|m| m.token.as_deref())
            .filter(|t| !t.is_empty())
    }

    pub fn role(&self) -> Option<Role> {
        self.meta
            .as_ref()
            .and_then(|m| m.role.as_deref())
            .and_then(Role::parse_lenient)
    }
}

// =========================================================
// Request Definitions
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginByEmailRequest {
    pub email: String,
    pub password: String,
    pub device_id: String,
}

/// Login returns its credentials in `meta`, `data` is ignored.
impl ApiRequest for LoginByEmailRequest {
    type Response = serde::de::IgnoredAny;
    const PATH: &'static str = "/auths/loginByEmail";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
    pub device_id: String,
}

/// Only the envelope status matters; whatever `data` holds is skipped.
impl ApiRequest for RegisterRequest {
    type Response = serde::de::IgnoredAny;
    const PATH: &'static str = "/auths/register";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// The signed-in job seeker's resume.
#[derive(Debug, Serialize, Deserialize)]
pub struct MyResumeRequest;

impl ApiRequest for MyResumeRequest {
    type Response = Resume;
    const PATH: &'static str = "/resume/my";
    const METHOD: HttpMethod = HttpMethod::Get;
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MyApplicationsRequest;

impl ApiRequest for MyApplicationsRequest {
    type Response = Vec<Application>;
    const PATH: &'static str = "/application/my";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// Jobs posted by the signed-in company.
#[derive(Debug, Serialize, Deserialize)]
pub struct MyJobsRequest;

impl ApiRequest for MyJobsRequest {
    type Response = Vec<Job>;
    const PATH: &'static str = "/job/my";
    const METHOD: HttpMethod = HttpMethod::Get;
}

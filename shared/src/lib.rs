//! Wire model shared by the headhunt client crates.
//!
//! Nothing in here touches the browser, so it builds and tests on any host.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod protocol;

pub use protocol::{
    ApiRequest, Envelope, HttpMethod, LoginByEmailRequest, Meta, MyApplicationsRequest,
    MyJobsRequest, MyResumeRequest, RegisterRequest,
};

// =========================================================
// Constants
// =========================================================

pub const STORAGE_TOKEN_KEY: &str = "auth_token";
pub const STORAGE_ROLE_KEY: &str = "user_role";
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";
/// Envelope status for a successful call.
pub const STATUS_OK: &str = "OK";
pub const APPLICATION_PENDING: &str = "PENDING";

// =========================================================
// Roles
// =========================================================

/// Account kind, fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    JobSeeker,
    Company,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::JobSeeker => "JOB_SEEKER",
            Role::Company => "COMPANY",
        }
    }

    /// Parses the wire form, treating anything unrecognised as "no role".
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {:?}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "JOB_SEEKER" => Ok(Role::JobSeeker),
            "COMPANY" => Ok(Role::Company),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

// =========================================================
// Dashboard models
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub education: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i64,
    pub company_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub salary: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: i64,
    pub job_id: i64,
    pub user_id: i64,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<Job>,
}

impl Application {
    pub fn is_pending(&self) -> bool {
        self.status == APPLICATION_PENDING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_wire_form_matches_server() {
        assert_eq!(Role::JobSeeker.as_str(), "JOB_SEEKER");
        assert_eq!(Role::Company.to_string(), "COMPANY");
        assert_eq!("COMPANY".parse::<Role>(), Ok(Role::Company));
        assert_eq!(
            serde_json::to_string(&Role::JobSeeker).unwrap(),
            "\"JOB_SEEKER\""
        );
    }

    #[test]
    fn unknown_role_is_lenient() {
        assert_eq!(Role::parse_lenient(""), None);
        assert_eq!(Role::parse_lenient("ADMIN"), None);
        assert!("job_seeker".parse::<Role>().is_err());
    }

    #[test]
    fn application_decodes_camel_case() {
        let raw = r#"{"id":3,"jobId":7,"userId":1,"status":"PENDING"}"#;
        let app: Application = serde_json::from_str(raw).unwrap();
        assert_eq!(app.job_id, 7);
        assert!(app.is_pending());
        assert!(app.job.is_none());
    }

    #[test]
    fn resume_tolerates_missing_lists() {
        let raw = r#"{"id":1,"userId":2}"#;
        let resume: Resume = serde_json::from_str(raw).unwrap();
        assert!(resume.skills.is_empty());
        assert_eq!(resume.education, "");
    }
}

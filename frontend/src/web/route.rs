//! Route definitions.
//!
//! Pure domain layer: no DOM, no `web_sys`. Each route declares how it may be
//! reached; the guard is the only consumer of that declaration.

use std::fmt::Display;

use headhunt_shared::Role;

use crate::guard::{RouteAccess, RoutePolicy};

const JOB_SEEKER_ONLY: RoutePolicy = RoutePolicy::only(&[Role::JobSeeker]);
const COMPANY_ONLY: RoutePolicy = RoutePolicy::only(&[Role::Company]);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Landing page.
    #[default]
    Home,
    Login,
    Register,
    Dashboard,
    ResumeCreate,
    ResumeEdit,
    MyApplications,
    CompanyPostJob,
    CompanyJobs,
    /// `/company/jobs/:id/edit`
    CompanyJobEdit(String),
    CompanyProfile,
    CompanyApplications,
    NotFound,
}

impl AppRoute {
    /// Parses a URL path (no query or fragment) into a route.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["login"] => Self::Login,
            ["register"] => Self::Register,
            ["dashboard"] => Self::Dashboard,
            ["resume", "create"] => Self::ResumeCreate,
            ["resume", "edit"] => Self::ResumeEdit,
            ["my-applications"] => Self::MyApplications,
            ["company", "post-job"] => Self::CompanyPostJob,
            ["company", "jobs"] => Self::CompanyJobs,
            ["company", "jobs", id, "edit"] if !id.is_empty() => {
                Self::CompanyJobEdit((*id).to_string())
            }
            ["company", "profile"] => Self::CompanyProfile,
            ["company", "applications"] => Self::CompanyApplications,
            _ => Self::NotFound,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::ResumeCreate => "/resume/create".to_string(),
            Self::ResumeEdit => "/resume/edit".to_string(),
            Self::MyApplications => "/my-applications".to_string(),
            Self::CompanyPostJob => "/company/post-job".to_string(),
            Self::CompanyJobs => "/company/jobs".to_string(),
            Self::CompanyJobEdit(id) => format!("/company/jobs/{id}/edit"),
            Self::CompanyProfile => "/company/profile".to_string(),
            Self::CompanyApplications => "/company/applications".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **Route access declaration**
    pub fn access(&self) -> RouteAccess {
        match self {
            Self::Home | Self::Login | Self::Register | Self::NotFound => RouteAccess::Public,
            Self::Dashboard => RouteAccess::Protected(RoutePolicy::any_authenticated()),
            Self::ResumeCreate | Self::ResumeEdit | Self::MyApplications => {
                RouteAccess::Protected(JOB_SEEKER_ONLY)
            }
            Self::CompanyPostJob
            | Self::CompanyJobs
            | Self::CompanyJobEdit(_)
            | Self::CompanyProfile
            | Self::CompanyApplications => RouteAccess::Protected(COMPANY_ONLY),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Sign in",
            Self::Register => "Create account",
            Self::Dashboard => "Dashboard",
            Self::ResumeCreate => "Create resume",
            Self::ResumeEdit => "Edit resume",
            Self::MyApplications => "My applications",
            Self::CompanyPostJob => "Post a job",
            Self::CompanyJobs => "Company jobs",
            Self::CompanyJobEdit(_) => "Edit job",
            Self::CompanyProfile => "Company profile",
            Self::CompanyApplications => "Applications received",
            Self::NotFound => "Not found",
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_declared_path() {
        let routes = [
            AppRoute::Home,
            AppRoute::Login,
            AppRoute::Register,
            AppRoute::Dashboard,
            AppRoute::ResumeCreate,
            AppRoute::ResumeEdit,
            AppRoute::MyApplications,
            AppRoute::CompanyPostJob,
            AppRoute::CompanyJobs,
            AppRoute::CompanyJobEdit("17".into()),
            AppRoute::CompanyProfile,
            AppRoute::CompanyApplications,
        ];
        for route in routes {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn tolerates_trailing_slash_and_query() {
        assert_eq!(AppRoute::from_path("/dashboard/"), AppRoute::Dashboard);
        assert_eq!(AppRoute::from_path("/login?next=1"), AppRoute::Login);
        assert_eq!(AppRoute::from_path(""), AppRoute::Home);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(AppRoute::from_path("/jobs"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/company/jobs//edit"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/company"), AppRoute::NotFound);
    }

    #[test]
    fn access_table() {
        assert_eq!(AppRoute::Login.access(), RouteAccess::Public);
        assert_eq!(
            AppRoute::Dashboard.access(),
            RouteAccess::Protected(RoutePolicy::any_authenticated())
        );
        assert_eq!(
            AppRoute::MyApplications.access(),
            RouteAccess::Protected(JOB_SEEKER_ONLY)
        );
        assert_eq!(
            AppRoute::CompanyJobEdit("1".into()).access(),
            RouteAccess::Protected(COMPANY_ONLY)
        );
    }
}

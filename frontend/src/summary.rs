//! Role-specific dashboard data.

use headhunt_shared::{
    Application, Job, MyApplicationsRequest, MyJobsRequest, MyResumeRequest, Resume, Role,
};

use crate::credentials::KeyValueStore;
use crate::error::ApiResult;
use crate::http::{ApiClient, HttpClient};
use crate::notify::Notifier;

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardSummary {
    JobSeeker {
        resume: Option<Resume>,
        applications: Vec<Application>,
    },
    Company {
        jobs: Vec<Job>,
    },
}

impl DashboardSummary {
    /// Loads what the dashboard shows for `role`.
    ///
    /// A job seeker without a resume is normal: that failure is logged and
    /// the load continues. Other failures propagate; the API client has
    /// already notified the user.
    pub async fn load<H, K, N>(api: &ApiClient<H, K, N>, role: Role) -> ApiResult<Self>
    where
        H: HttpClient,
        K: KeyValueStore,
        N: Notifier,
    {
        match role {
            Role::JobSeeker => {
                let resume = match api.send(&MyResumeRequest).await {
                    Ok(envelope) => envelope.into_ok_data(),
                    Err(err) => {
                        log::info!("[Dashboard] no resume found: {}", err);
                        None
                    }
                };
                let applications = api
                    .send(&MyApplicationsRequest)
                    .await?
                    .into_ok_data()
                    .unwrap_or_default();
                Ok(Self::JobSeeker {
                    resume,
                    applications,
                })
            }
            Role::Company => {
                let jobs = api
                    .send(&MyJobsRequest)
                    .await?
                    .into_ok_data()
                    .unwrap_or_default();
                Ok(Self::Company { jobs })
            }
        }
    }

    pub fn pending_applications(&self) -> usize {
        match self {
            Self::JobSeeker { applications, .. } => {
                applications.iter().filter(|a| a.is_pending()).count()
            }
            Self::Company { .. } => 0,
        }
    }

    pub fn has_resume(&self) -> bool {
        matches!(self, Self::JobSeeker { resume: Some(_), .. })
    }
}

use headhunt_shared::{Application, Job};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{use_auth, use_auth_service};
use crate::summary::DashboardSummary;
use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let service = use_auth_service();

    let (summary, set_summary) = signal(Option::<DashboardSummary>::None);
    let (is_loading, set_is_loading) = signal(true);

    // Loads once per mount; the router only mounts this page when signed in.
    match auth.state.get_untracked().role {
        Some(role) => {
            spawn_local(async move {
                match DashboardSummary::load(service.api(), role).await {
                    Ok(data) => set_summary.set(Some(data)),
                    // Already notified by the client.
                    Err(err) => log::warn!("[Dashboard] summary unavailable: {}", err),
                }
                set_is_loading.set(false);
            });
        }
        None => set_is_loading.set(false),
    }

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8">
            <div class="max-w-5xl mx-auto space-y-8">
                <h1 class="text-3xl font-bold">"Dashboard"</h1>
                <Show
                    when=move || !is_loading.get()
                    fallback=|| view! { <span class="loading loading-spinner loading-lg text-primary"></span> }
                >
                    {move || match summary.get() {
                        Some(data) => {
                            let has_resume = data.has_resume();
                            let pending = data.pending_applications();
                            match data {
                                DashboardSummary::JobSeeker { applications, .. } => view! {
                                    <JobSeekerPanel has_resume=has_resume pending=pending applications=applications />
                                }
                                .into_any(),
                                DashboardSummary::Company { jobs } => {
                                    view! { <CompanyPanel jobs=jobs /> }.into_any()
                                }
                            }
                        }
                        None => view! {
                            <p class="text-base-content/70">"Nothing to show for this account."</p>
                        }
                        .into_any(),
                    }}
                </Show>
            </div>
        </div>
    }
}

#[component]
fn JobSeekerPanel(
    has_resume: bool,
    pending: usize,
    applications: Vec<Application>,
) -> impl IntoView {
    let total = applications.len();

    view! {
        <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
            <div class="stat">
                <div class="stat-title">"Applications"</div>
                <div class="stat-value text-primary">{total}</div>
            </div>
            <div class="stat">
                <div class="stat-title">"Pending"</div>
                <div class="stat-value text-secondary">{pending}</div>
            </div>
        </div>
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h3 class="card-title">"Resume"</h3>
                {if has_resume {
                    view! { <Link to=AppRoute::ResumeEdit class="btn btn-outline">"Edit resume"</Link> }.into_any()
                } else {
                    view! { <Link to=AppRoute::ResumeCreate class="btn btn-primary">"Create resume"</Link> }.into_any()
                }}
            </div>
        </div>
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h3 class="card-title">"Recent applications"</h3>
                <ul class="menu">
                    {applications
                        .into_iter()
                        .map(|app| {
                            let title = app.job.map(|j| j.title).unwrap_or_else(|| format!("Job #{}", app.job_id));
                            view! {
                                <li class="flex flex-row justify-between">
                                    <span>{title}</span>
                                    <span class="badge badge-outline">{app.status}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

#[component]
fn CompanyPanel(jobs: Vec<Job>) -> impl IntoView {
    let total = jobs.len();

    view! {
        <div class="stats shadow w-full bg-base-100">
            <div class="stat">
                <div class="stat-title">"Open positions"</div>
                <div class="stat-value text-primary">{total}</div>
            </div>
        </div>
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h3 class="card-title">"Your jobs"</h3>
                    <Link to=AppRoute::CompanyPostJob class="btn btn-primary btn-sm">"Post a job"</Link>
                </div>
                <table class="table table-zebra w-full">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Salary"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {jobs
                            .into_iter()
                            .map(|job| {
                                let edit = AppRoute::CompanyJobEdit(job.id.to_string());
                                view! {
                                    <tr>
                                        <td>{job.title}</td>
                                        <td>{format!("{:.0}", job.salary)}</td>
                                        <td><Link to=edit class="btn btn-ghost btn-xs">"Edit"</Link></td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

use headhunt_shared::Role;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::auth::{use_auth, use_auth_service};
use crate::web::route::AppRoute;
use crate::web::router::{BrowserNavigator, Link};

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let service = use_auth_service();

    let signed_in = move || auth.state.get().is_authenticated;
    let role = move || auth.state.get().role;

    let on_logout = move |_: MouseEvent| service.logout(&auth, &BrowserNavigator);

    view! {
        <div class="navbar bg-base-100 shadow">
            <div class="flex-1">
                <Link to=AppRoute::Home class="btn btn-ghost text-xl">"Headhunt"</Link>
            </div>
            <div class="flex-none gap-2">
                <Show
                    when=signed_in
                    fallback=|| view! {
                        <Link to=AppRoute::Login class="btn btn-ghost">"Sign in"</Link>
                        <Link to=AppRoute::Register class="btn btn-primary">"Register"</Link>
                    }
                >
                    {move || match role() {
                        Some(Role::JobSeeker) => view! {
                            <Link to=AppRoute::MyApplications class="btn btn-ghost">"My applications"</Link>
                        }
                        .into_any(),
                        Some(Role::Company) => view! {
                            <Link to=AppRoute::CompanyJobs class="btn btn-ghost">"Our jobs"</Link>
                        }
                        .into_any(),
                        None => ().into_any(),
                    }}
                    <Link to=AppRoute::Dashboard class="btn btn-ghost">"Dashboard"</Link>
                    <button class="btn btn-outline btn-error" on:click=on_logout.clone()>
                        "Sign out"
                    </button>
                </Show>
            </div>
        </div>
    }
}

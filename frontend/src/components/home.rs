use leptos::prelude::*;

use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="hero min-h-[60vh] bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md">
                    <h1 class="text-5xl font-bold">"Find your next job"</h1>
                    <p class="py-6">
                        "Job seekers publish a resume and apply. Companies post openings and review applicants."
                    </p>
                    <Link to=AppRoute::Register class="btn btn-primary">"Get started"</Link>
                </div>
            </div>
        </div>
    }
}

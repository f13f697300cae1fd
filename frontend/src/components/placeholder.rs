//! Pages whose content lives outside the auth core.

use leptos::prelude::*;

use crate::web::route::AppRoute;
use crate::web::router::Link;

#[component]
pub fn PlaceholderPage(route: AppRoute) -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto p-8">
            <h1 class="text-3xl font-bold mb-4">{route.title()}</h1>
            <p class="text-base-content/70">"This page is not available yet."</p>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl mt-4">"Page not found"</p>
                <Link to=AppRoute::Home class="btn btn-link mt-4">"Back to home"</Link>
            </div>
        </div>
    }
}

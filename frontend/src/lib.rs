//! Headhunt web client.
//!
//! Context-driven layout:
//! - `credentials` / `http`: token persistence and the API client
//! - `session` / `auth`: session state and the only actions that change it
//! - `guard` / `web::route` / `web::router`: route access and navigation
//! - `components`: UI

pub mod auth;
pub mod config;
pub mod credentials;
pub mod error;
pub mod guard;
pub mod http;
pub mod notify;
pub mod session;
pub mod summary;

mod components {
    pub mod dashboard;
    pub mod header;
    pub mod home;
    pub mod login;
    pub mod placeholder;
    pub mod register;
    pub mod toaster;
}

// Browser adapters. Everything touching `web_sys` lives here.
pub mod web {
    mod http;
    pub mod route;
    pub mod router;
    mod storage;

    pub use http::FetchHttpClient;
    pub use storage::LocalStorage;
}

use leptos::prelude::*;

use crate::auth::{AuthContext, AuthService, BrowserAuthService};
use crate::components::dashboard::DashboardPage;
use crate::components::header::Header;
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::placeholder::{NotFoundPage, PlaceholderPage};
use crate::components::register::RegisterPage;
use crate::components::toaster::{ToastQueue, Toaster};
use crate::config::AppConfig;
use crate::credentials::CredentialStore;
use crate::http::ApiClient;
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};
use crate::web::{FetchHttpClient, LocalStorage};

fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
        other => view! { <PlaceholderPage route=other /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    log::info!("[App] starting against {}", config.api_base_url);

    let toasts = ToastQueue::new();

    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    let api = ApiClient::new(
        FetchHttpClient,
        config.api_base_url,
        CredentialStore::new(LocalStorage),
        toasts.notifier(),
    );
    let service: BrowserAuthService = AuthService::new(api);

    // Resolve the session before the router makes its first decision.
    service.restore(&auth_ctx);
    provide_context(service);

    let session = auth_ctx.session_signal();

    view! {
        <Toaster queue=toasts />
        <Router session=session>
            <Header />
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}

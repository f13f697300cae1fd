//! Router service.
//!
//! All `window.history` access lives here. Every navigation goes through
//! [`plan_navigation`]: request, guard, then history update and render.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;
use crate::auth::Navigator;
use crate::guard::{Navigation, plan_navigation};
use crate::session::Session;

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn write_history(path: &str, push: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let result = if push {
        history.push_state_with_url(&JsValue::NULL, "", Some(path))
    } else {
        history.replace_state_with_url(&JsValue::NULL, "", Some(path))
    };
    if let Err(err) = result {
        log::warn!("[Router] history update to {} failed: {:?}", path, err);
    }
}

/// Full page load, used where in-memory state must not survive.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn hard_navigate(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_href(path) {
            log::error!("[Router] could not load {}: {:?}", path, err);
        }
    }
}

#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    /// Protected route the user was bounced from, consumed after login.
    return_to: RwSignal<Option<AppRoute>>,
    session: Signal<Session>,
}

impl RouterService {
    fn new(session: Signal<Session>) -> Self {
        let (current_route, set_route) = signal(AppRoute::from_path(&current_path()));
        Self {
            current_route,
            set_route,
            return_to: RwSignal::new(None),
            session,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// Guard decision for the current route under the current session.
    pub fn plan(&self) -> Navigation {
        plan_navigation(&self.session.get(), self.current_route.get())
    }

    pub fn navigate(&self, path: &str) {
        self.navigate_to(AppRoute::from_path(path));
    }

    pub fn navigate_to(&self, target: AppRoute) {
        let session = self.session.get_untracked();
        self.apply(plan_navigation(&session, target), true);
    }

    /// Where to go once signed in.
    pub fn take_return_to(&self) -> AppRoute {
        self.return_to
            .try_update(|route| route.take())
            .flatten()
            .unwrap_or(AppRoute::Dashboard)
    }

    fn apply(&self, navigation: Navigation, push: bool) {
        match navigation {
            Navigation::Render(route) | Navigation::Wait(route) => {
                write_history(&route.to_path(), push);
                self.set_route.set(route);
            }
            Navigation::Redirect { to, return_to } => {
                log::info!(
                    "[Router] access denied, redirecting to {} (from {:?})",
                    to,
                    return_to
                );
                if return_to.is_some() {
                    self.return_to.set(return_to);
                }
                write_history(&to.to_path(), push);
                self.set_route.set(to);
            }
        }
    }

    /// Back/forward buttons go through the guard too.
    fn init_popstate_listener(&self) {
        let router = *self;
        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            let session = router.session.get_untracked();
            router.apply(plan_navigation(&session, target), false);
        });

        if let Some(window) = web_sys::window() {
            if let Err(err) = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
            {
                log::warn!("[Router] popstate listener not installed: {:?}", err);
            }
        }

        // The listener lives as long as the page.
        closure.forget();
    }

    /// Re-checks the current route whenever the session changes.
    fn setup_session_redirect(&self) {
        let router = *self;
        Effect::new(move |_| {
            let session = router.session.get();
            let route = router.current_route.get_untracked();
            let navigation = plan_navigation(&session, route);
            if matches!(navigation, Navigation::Redirect { .. }) {
                router.apply(navigation, false);
            }
        });
    }
}

fn provide_router(session: Signal<Session>) -> RouterService {
    let router = RouterService::new(session);
    router.init_popstate_listener();
    router.setup_session_redirect();
    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// Components
// ============================================================================

#[component]
pub fn Router(session: Signal<Session>, children: Children) -> impl IntoView {
    provide_router(session);
    children()
}

/// Renders the current route, or a spinner while the guard cannot decide.
#[component]
pub fn RouterOutlet(matcher: fn(AppRoute) -> AnyView) -> impl IntoView {
    let router = use_router();
    // Memoised so session changes that keep the decision do not remount the page.
    let plan = Memo::new(move |_| router.plan());

    move || match plan.get() {
        Navigation::Render(route) => matcher(route),
        Navigation::Wait(_) | Navigation::Redirect { .. } => view! {
            <div class="flex items-center justify-center min-h-screen">
                <span class="loading loading-spinner loading-lg text-primary"></span>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn Link(
    to: AppRoute,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let href = to.to_path();

    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        router.navigate_to(to.clone());
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}

//! Access guard.
//!
//! Pure decision over the session and a route's declared policy. It performs
//! no I/O and never navigates; the router turns a [`Navigation`] into history
//! updates.

use headhunt_shared::Role;

use crate::session::Session;
use crate::web::route::AppRoute;

/// Roles allowed on a protected route. Empty means any signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutePolicy {
    allowed_roles: &'static [Role],
}

impl RoutePolicy {
    pub const fn any_authenticated() -> Self {
        Self { allowed_roles: &[] }
    }

    pub const fn only(roles: &'static [Role]) -> Self {
        Self {
            allowed_roles: roles,
        }
    }

    /// Whether an authenticated user with `role` may enter.
    pub fn admits(&self, role: Option<Role>) -> bool {
        if self.allowed_roles.is_empty() {
            return true;
        }
        role.is_some_and(|role| self.allowed_roles.contains(&role))
    }
}

/// How a route is reached. Public routes bypass the guard entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Protected(RoutePolicy),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    NotAuthenticated,
    RoleMismatch,
}

impl DenyReason {
    pub fn redirect_target(&self) -> AppRoute {
        match self {
            DenyReason::NotAuthenticated => AppRoute::Login,
            DenyReason::RoleMismatch => AppRoute::Dashboard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    /// Session not resolved yet: show a wait indicator, do not redirect.
    Loading,
    Granted,
    Denied(DenyReason),
}

pub fn evaluate(session: &Session, policy: &RoutePolicy) -> AccessDecision {
    if session.loading {
        return AccessDecision::Loading;
    }
    if !session.is_authenticated {
        return AccessDecision::Denied(DenyReason::NotAuthenticated);
    }
    if !policy.admits(session.role) {
        return AccessDecision::Denied(DenyReason::RoleMismatch);
    }
    AccessDecision::Granted
}

/// What the router should do with a requested route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Render(AppRoute),
    Wait(AppRoute),
    /// `return_to` is remembered so login can send the user back.
    Redirect {
        to: AppRoute,
        return_to: Option<AppRoute>,
    },
}

pub fn plan_navigation(session: &Session, target: AppRoute) -> Navigation {
    let policy = match target.access() {
        RouteAccess::Public => return Navigation::Render(target),
        RouteAccess::Protected(policy) => policy,
    };

    match evaluate(session, &policy) {
        AccessDecision::Loading => Navigation::Wait(target),
        AccessDecision::Granted => Navigation::Render(target),
        AccessDecision::Denied(reason @ DenyReason::NotAuthenticated) => Navigation::Redirect {
            to: reason.redirect_target(),
            return_to: Some(target),
        },
        AccessDecision::Denied(reason @ DenyReason::RoleMismatch) => Navigation::Redirect {
            to: reason.redirect_target(),
            return_to: None,
        },
    }
}

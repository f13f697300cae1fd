//! Session state for the current page load.
//!
//! A [`Session`] is a plain value. Whoever holds it implements [`SessionCell`]
//! (a `Cell` in tests, the Leptos signals in the app) and hands it to the
//! auth actions, which are its only writer.

use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};

use headhunt_shared::Role;

use crate::credentials::Credential;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub is_authenticated: bool,
    pub role: Option<Role>,
    /// True until the stored credential has been read, and while an auth
    /// action is in flight.
    pub loading: bool,
}

impl Session {
    /// State at application start, before storage has been consulted.
    pub const fn starting() -> Self {
        Self {
            is_authenticated: false,
            role: None,
            loading: true,
        }
    }

    pub const fn signed_out() -> Self {
        Self {
            is_authenticated: false,
            role: None,
            loading: false,
        }
    }

    pub const fn signed_in(role: Option<Role>) -> Self {
        Self {
            is_authenticated: true,
            role,
            loading: false,
        }
    }

    /// Session implied by whatever credential storage holds.
    pub fn from_credential(credential: Option<&Credential>) -> Self {
        match credential {
            Some(c) => Self::signed_in(c.role),
            None => Self::signed_out(),
        }
    }
}

/// Holder of the live session.
pub trait SessionCell {
    fn get(&self) -> Session;
    fn set(&self, session: Session);

    fn update(&self, f: impl FnOnce(&mut Session)) {
        let mut session = self.get();
        f(&mut session);
        self.set(session);
    }
}

impl SessionCell for Cell<Session> {
    fn get(&self) -> Session {
        Cell::get(self)
    }

    fn set(&self, session: Session) {
        Cell::set(self, session);
    }
}

/// Holds `loading = true` while alive.
///
/// Overlapping actions share one counter; `loading` is released only when
/// the last guard drops, whatever the outcome of each action.
pub struct LoadingGuard<'a, C: SessionCell> {
    session: &'a C,
    in_flight: &'a AtomicUsize,
}

impl<'a, C: SessionCell> LoadingGuard<'a, C> {
    pub fn acquire(session: &'a C, in_flight: &'a AtomicUsize) -> Self {
        in_flight.fetch_add(1, Ordering::SeqCst);
        session.update(|s| s.loading = true);
        Self { session, in_flight }
    }
}

impl<C: SessionCell> Drop for LoadingGuard<'_, C> {
    fn drop(&mut self) {
        let remaining = self.in_flight.fetch_sub(1, Ordering::SeqCst) - 1;
        self.session.update(|s| s.loading = remaining > 0);
    }
}

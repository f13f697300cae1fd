//! Authentication module
//!
//! [`AuthService`] owns the login/register/logout actions and is the single
//! writer of both the credential store and the session. The session itself
//! is injected per call, so the same service drives the Leptos
//! [`AuthContext`] in the app and a plain `Cell` in tests.

use std::sync::Arc;
use std::sync::atomic::AtomicUsize;

use headhunt_shared::{LoginByEmailRequest, RegisterRequest, Role};
use leptos::prelude::*;

use crate::components::toaster::ToastNotifier;
use crate::config::DEVICE_ID_PREFIX;
use crate::credentials::{Credential, KeyValueStore};
use crate::error::{ApiError, ApiResult};
use crate::http::{ApiClient, HttpClient};
use crate::notify::Notifier;
use crate::session::{LoadingGuard, Session, SessionCell};
use crate::web::route::AppRoute;
use crate::web::{FetchHttpClient, LocalStorage};

#[cfg(test)]
mod tests;

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your credentials.";
pub const REGISTER_FAILED_MESSAGE: &str = "Registration failed.";
pub const STORAGE_FAILED_MESSAGE: &str =
    "Could not save your session. Check that site storage is enabled.";
pub const LOGIN_SUCCESS_MESSAGE: &str = "Signed in successfully!";
pub const REGISTER_SUCCESS_MESSAGE: &str = "Registered successfully!";

/// Hard (full page) navigation, used by logout.
pub trait Navigator {
    fn hard_navigate(&self, path: &str);
}

/// Fresh per-request device identifier: `web-` plus nine lowercase hex digits.
pub fn device_id() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    format!("{}{}", DEVICE_ID_PREFIX, &id[..9])
}

#[derive(Clone)]
pub struct AuthService<H, K, N> {
    api: ApiClient<H, K, N>,
    in_flight: Arc<AtomicUsize>,
}

impl<H, K, N> AuthService<H, K, N>
where
    H: HttpClient,
    K: KeyValueStore,
    N: Notifier,
{
    pub fn new(api: ApiClient<H, K, N>) -> Self {
        Self {
            api,
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn api(&self) -> &ApiClient<H, K, N> {
        &self.api
    }

    /// Resolves the startup session from stored credentials.
    pub fn restore<C: SessionCell>(&self, session: &C) {
        let credential = self.api.credentials().get();
        let restored = Session::from_credential(credential.as_ref());
        log::debug!(
            "[Auth] restored session: authenticated={} role={:?}",
            restored.is_authenticated,
            restored.role
        );
        SessionCell::set(session, restored);
    }

    /// Signs in and persists the credential.
    ///
    /// Transport failures were already reported by the API client; a refusal
    /// by the server is reported here, once.
    pub async fn login<C: SessionCell>(
        &self,
        session: &C,
        email: &str,
        password: &str,
    ) -> ApiResult<()> {
        let _loading = LoadingGuard::acquire(session, &self.in_flight);
        self.sign_in(session, email, password).await?;
        self.api.notifier().success(LOGIN_SUCCESS_MESSAGE);
        Ok(())
    }

    /// Authenticates, persists, then marks the session signed in. The session
    /// is only touched once the credential is readable from storage.
    async fn sign_in<C: SessionCell>(
        &self,
        session: &C,
        email: &str,
        password: &str,
    ) -> ApiResult<()> {
        let credential = self.authenticate(email, password).await?;
        if !self.api.credentials().set(&credential) {
            self.api.notifier().error(STORAGE_FAILED_MESSAGE);
            return Err(ApiError::Storage(
                "credential could not be persisted".to_string(),
            ));
        }
        // Qualified calls: the Leptos prelude brings its own `update`/`set`.
        SessionCell::update(session, |s| {
            s.is_authenticated = true;
            s.role = credential.role;
        });
        log::info!("[Auth] signed in as {:?}", credential.role);
        Ok(())
    }

    async fn authenticate(&self, email: &str, password: &str) -> ApiResult<Credential> {
        let request = LoginByEmailRequest {
            email: email.to_string(),
            password: password.to_string(),
            device_id: device_id(),
        };

        let envelope = self
            .api
            .send(&request)
            .await
            .map_err(ApiError::into_auth_rejection)?;

        match (envelope.is_ok(), envelope.token()) {
            (true, Some(token)) => Ok(Credential::new(token, envelope.role())),
            _ => {
                log::warn!("[Auth] login rejected with status {:?}", envelope.status);
                self.api.notifier().error(LOGIN_FAILED_MESSAGE);
                Err(ApiError::auth(format!(
                    "login refused (status {})",
                    envelope.status
                )))
            }
        }
    }

    /// Creates the account, then signs in with the same credentials.
    ///
    /// Registration alone never establishes a session; a failure of the
    /// follow-up login is returned as-is.
    pub async fn register<C: SessionCell>(
        &self,
        session: &C,
        email: &str,
        password: &str,
        role: Role,
    ) -> ApiResult<()> {
        let _loading = LoadingGuard::acquire(session, &self.in_flight);

        let request = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            role,
            device_id: device_id(),
        };
        let envelope = self
            .api
            .send(&request)
            .await
            .map_err(ApiError::into_auth_rejection)?;

        if !envelope.is_ok() {
            log::warn!("[Auth] registration rejected with status {:?}", envelope.status);
            self.api.notifier().error(REGISTER_FAILED_MESSAGE);
            return Err(ApiError::auth(format!(
                "registration refused (status {})",
                envelope.status
            )));
        }

        self.sign_in(session, email, password).await?;
        self.api.notifier().success(REGISTER_SUCCESS_MESSAGE);
        Ok(())
    }

    /// Drops the credential, resets the session and leaves for the login page.
    pub fn logout<C: SessionCell, V: Navigator>(&self, session: &C, navigator: &V) {
        self.api.credentials().clear();
        SessionCell::set(session, Session::signed_out());
        log::info!("[Auth] signed out");
        navigator.hard_navigate(&AppRoute::Login.to_path());
    }
}

// ============================================================================
// Leptos glue
// ============================================================================

/// Session signals shared through context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// Session (read side)
    pub state: ReadSignal<Session>,
    /// Session (write side), only written through [`AuthService`]
    pub set_state: WriteSignal<Session>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(Session::starting());
        Self { state, set_state }
    }

    /// Session signal for injection into the router.
    pub fn session_signal(&self) -> Signal<Session> {
        let state = self.state;
        Signal::derive(move || state.get())
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionCell for AuthContext {
    fn get(&self) -> Session {
        self.state.get_untracked()
    }

    fn set(&self, session: Session) {
        self.set_state.set(session);
    }
}

/// Auth service as wired for the browser.
pub type BrowserAuthService = AuthService<FetchHttpClient, LocalStorage, ToastNotifier>;

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

pub fn use_auth_service() -> BrowserAuthService {
    use_context::<BrowserAuthService>().expect("AuthService should be provided")
}

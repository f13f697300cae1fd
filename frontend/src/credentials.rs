//! Credential persistence.
//!
//! The token and role survive reloads in origin-scoped storage under two fixed
//! keys. Storage being unavailable reads as "no credential" and never panics.

use headhunt_shared::{Role, STORAGE_ROLE_KEY, STORAGE_TOKEN_KEY};

/// Minimal string key/value backend (browser `localStorage`, or a map in tests).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    /// Returns `false` when the write could not be performed.
    fn set(&self, key: &str, value: &str) -> bool;
    fn delete(&self, key: &str) -> bool;
}

/// Bearer token plus the role it was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub token: String,
    pub role: Option<Role>,
}

impl Credential {
    pub fn new(token: impl Into<String>, role: Option<Role>) -> Self {
        Self {
            token: token.into(),
            role,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CredentialStore<K> {
    backend: K,
}

impl<K: KeyValueStore> CredentialStore<K> {
    pub fn new(backend: K) -> Self {
        Self { backend }
    }

    /// The stored credential, if a non-empty token is present.
    pub fn get(&self) -> Option<Credential> {
        let token = self
            .backend
            .get(STORAGE_TOKEN_KEY)
            .filter(|t| !t.is_empty())?;
        let role = self
            .backend
            .get(STORAGE_ROLE_KEY)
            .as_deref()
            .and_then(Role::parse_lenient);
        Some(Credential { token, role })
    }

    pub fn token(&self) -> Option<String> {
        self.get().map(|c| c.token)
    }

    /// Returns `false` if the credential is not readable back afterwards;
    /// a half-written record is cleared.
    #[must_use]
    pub fn set(&self, credential: &Credential) -> bool {
        let stored = self.backend.set(STORAGE_TOKEN_KEY, &credential.token)
            && match credential.role {
                Some(role) => self.backend.set(STORAGE_ROLE_KEY, role.as_str()),
                None => self.backend.delete(STORAGE_ROLE_KEY),
            };
        if !stored {
            log::warn!("[Auth] credential storage unavailable");
            self.clear();
        }
        stored
    }

    pub fn clear(&self) {
        let token_gone = self.backend.delete(STORAGE_TOKEN_KEY);
        let role_gone = self.backend.delete(STORAGE_ROLE_KEY);
        if !(token_gone && role_gone) {
            log::warn!("[Auth] could not clear stored credentials");
        }
    }
}

use super::storage::KeyValueStore;
use crate::core::config::AppConfig;
use crate::core::error::{DashboardError, Result};
use crate::core::models::Route;

const AUTHENTICATED_VALUE: &str = "true";

/// Who is signed in. Restored once at startup, cleared on logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    authenticated: bool,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Reads the stored flag. Storage failures leave the session signed out.
    pub fn restore<S: KeyValueStore>(store: &S, config: &AppConfig) -> Self {
        let authenticated = match store.get(&config.auth_storage_key) {
            Ok(value) => value.as_deref() == Some(AUTHENTICATED_VALUE),
            Err(e) => {
                log::warn!("Could not read session flag: {}", e);
                false
            }
        };
        Self { authenticated }
    }

    /// Checks the credentials and, on success, persists the flag and returns
    /// the route to go to next.
    pub fn login<S: KeyValueStore>(
        &mut self,
        store: &S,
        config: &AppConfig,
        email: &str,
        password: &str,
    ) -> Result<Route> {
        if !config.credentials_match(email, password) {
            log::info!("Rejected login attempt for {}", email);
            return Err(DashboardError::InvalidCredentials);
        }

        if let Err(e) = store.set(&config.auth_storage_key, AUTHENTICATED_VALUE) {
            // The in-memory session still holds; only the next reload forgets it.
            log::error!("Failed to persist session flag: {}", e);
        }
        self.authenticated = true;
        log::info!("Signed in as {}", email);
        Ok(Route::Dashboard)
    }

    /// Clears the stored flag and signs out.
    pub fn logout<S: KeyValueStore>(&mut self, store: &S, config: &AppConfig) -> Route {
        if let Err(e) = store.remove(&config.auth_storage_key) {
            log::error!("Failed to clear session flag: {}", e);
        }
        self.authenticated = false;
        log::info!("Signed out");
        Route::Login
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::storage::MemoryStorage;

    #[test]
    fn restore_requires_exact_true() {
        let config = AppConfig::default();
        let store = MemoryStorage::new();
        assert!(!Session::restore(&store, &config).is_authenticated());

        store.set(&config.auth_storage_key, "TRUE").unwrap();
        assert!(!Session::restore(&store, &config).is_authenticated());

        store.set(&config.auth_storage_key, "true").unwrap();
        assert!(Session::restore(&store, &config).is_authenticated());
    }

    #[test]
    fn failed_login_writes_nothing() {
        let config = AppConfig::default();
        let store = MemoryStorage::new();
        let mut session = Session::default();

        let result = session.login(&store, &config, "admin@example.com", "wrong");
        assert_eq!(result, Err(DashboardError::InvalidCredentials));
        assert!(!session.is_authenticated());
        assert_eq!(store.get(&config.auth_storage_key).unwrap(), None);
    }
}

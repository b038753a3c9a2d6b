//! Depot helper extensions.

use std::any::Any;

use market_app::carts::data::SessionKey;
use salvo::prelude::{Depot, StatusError};

const SESSION_KEY_DEPOT_KEY: &str = "session_key";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_session_key(&mut self, session_key: SessionKey);

    fn session_key_or_500(&self) -> Result<SessionKey, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_session_key(&mut self, session_key: SessionKey) {
        self.insert(SESSION_KEY_DEPOT_KEY, session_key);
    }

    fn session_key_or_500(&self) -> Result<SessionKey, StatusError> {
        self.get::<SessionKey>(SESSION_KEY_DEPOT_KEY)
            .cloned()
            .map_err(|_ignored| StatusError::internal_server_error().brief("Missing session"))
    }
}

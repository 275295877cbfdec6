//! Shared application state for all routes.

use crate::identity::{AssertedName, IdentityProvider};
use crate::settings::SiteSettings;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Resolves the client-asserted `user_name` on adoption routes.
    pub identity: Arc<dyn IdentityProvider>,
    pub site: Arc<SiteSettings>,
}

impl AppState {
    /// State with the default identity provider, which trusts any non-empty name.
    pub fn new(pool: SqlitePool, site: SiteSettings) -> Self {
        AppState {
            pool,
            identity: Arc::new(AssertedName),
            site: Arc::new(site),
        }
    }
}
